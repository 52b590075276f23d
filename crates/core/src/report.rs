//! Typed interface to FUNGUS report files.
//!
//! A report is the JSON output of the plagiarism-detection tool: a list of
//! project pairs, each with two project names and a list of matches (one
//! code location per side), plus any warnings the tool emitted while
//! generating the report. This module parses that shape into [`model`] types
//! and validates every location on the way in.
//!
//! [`model`]: crate::model

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{CodeLocation, LocationError, Match, ProjectPair, Warning};
use crate::verdicts::{Verdict, VerdictMap};

/// Error raised while loading a report file.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not have the report shape.
    #[error("failed to parse report JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A match referenced a structurally invalid location.
    #[error("invalid location in project pair {pair_index}, match {match_index}, project {project}: {source}")]
    Location {
        pair_index: usize,
        match_index: usize,
        project: u8,
        #[source]
        source: LocationError,
    },
}

#[derive(Debug, Deserialize)]
struct RawReport {
    project_pairs: Vec<RawProjectPair>,
    #[serde(default)]
    warnings: Vec<Warning>,
}

#[derive(Debug, Deserialize)]
struct RawProjectPair {
    project1: String,
    project2: String,
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    project_1_location: RawLocation,
    project_2_location: RawLocation,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    file: String,
    span: RawSpan,
}

#[derive(Debug, Deserialize)]
struct RawSpan {
    start: usize,
    end: usize,
}

/// A loaded, validated report.
///
/// Project pairs are sorted by descending match count, matches by location
/// order, and warnings by (type, file, message), which is the order the
/// reviewer sees them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub project_pairs: Vec<ProjectPair>,
    pub warnings: Vec<Warning>,
}

impl Report {
    /// Parse a report from JSON text.
    pub fn from_str(data: &str) -> Result<Self, ReportError> {
        let raw: RawReport = serde_json::from_str(data)?;

        let mut project_pairs = Vec::with_capacity(raw.project_pairs.len());
        for (pair_index, raw_pair) in raw.project_pairs.into_iter().enumerate() {
            let mut matches = Vec::with_capacity(raw_pair.matches.len());
            for (match_index, raw_match) in raw_pair.matches.into_iter().enumerate() {
                let location1 = convert_location(raw_match.project_1_location)
                    .map_err(|source| ReportError::Location { pair_index, match_index, project: 1, source })?;
                let location2 = convert_location(raw_match.project_2_location)
                    .map_err(|source| ReportError::Location { pair_index, match_index, project: 2, source })?;
                matches.push(Match::new(location1, location2));
            }
            matches.sort_by(|a, b| {
                a.location1.cmp(&b.location1).then_with(|| a.location2.cmp(&b.location2))
            });
            project_pairs.push(ProjectPair::new(raw_pair.project1, raw_pair.project2, matches));
        }
        project_pairs.sort_by(|a, b| b.total_num_matches.cmp(&a.total_num_matches));

        let mut warnings = raw.warnings;
        warnings.sort();

        Ok(Self { project_pairs, warnings })
    }

    /// Read and parse a report file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str(&data)
    }
}

fn convert_location(raw: RawLocation) -> Result<CodeLocation, LocationError> {
    CodeLocation::new(raw.file, raw.span.start, raw.span.end)
}

/// Per-pair verdict tallies shown next to each project pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct VerdictCounts {
    pub plagiarism: usize,
    pub potential_plagiarism: usize,
    pub no_plagiarism: usize,
    pub no_verdict: usize,
}

/// Count the verdicts recorded for a project pair's matches.
pub fn count_verdicts(pair: &ProjectPair, verdicts: &VerdictMap) -> VerdictCounts {
    let mut counts = VerdictCounts::default();
    for m in &pair.matches {
        match verdicts.get_verdict(&m.location1, &m.location2) {
            Some(Verdict::Plagiarism) => counts.plagiarism += 1,
            Some(Verdict::PotentialPlagiarism) => counts.potential_plagiarism += 1,
            Some(Verdict::NoPlagiarism) => counts.no_plagiarism += 1,
            None => counts.no_verdict += 1,
        }
    }
    counts
}

/// Keep only the matches whose verdict is in `verdicts_to_show`, where `None`
/// selects matches with no recorded verdict. Pairs left with no matches are
/// dropped; `total_num_matches` keeps the pre-filter count.
pub fn filter_matches(
    pairs: &[ProjectPair],
    verdicts: &VerdictMap,
    verdicts_to_show: &[Option<Verdict>],
) -> Vec<ProjectPair> {
    pairs
        .iter()
        .filter_map(|pair| {
            let matches: Vec<Match> = pair
                .matches
                .iter()
                .filter(|m| {
                    verdicts_to_show.contains(&verdicts.get_verdict(&m.location1, &m.location2))
                })
                .cloned()
                .collect();
            if matches.is_empty() {
                return None;
            }
            Some(ProjectPair {
                project1: pair.project1.clone(),
                project2: pair.project2.clone(),
                matches,
                total_num_matches: pair.total_num_matches,
            })
        })
        .collect()
}
