use std::path::Path;

use anyhow::{anyhow, Context, Result};
use review_core::highlight::{partition, HighlightSpan};
use review_core::model::{CodeLocation, ProjectPair};
use review_core::report::Report;
use review_core::storage::{Loaded, VerdictsFile};
use serde::Serialize;

use crate::verdict_label;

/// One display segment of a partitioned source file. `match_index` names the
/// owning match within the pair (not the internal span), so consumers can
/// join segments back to the match list directly.
#[derive(Serialize)]
struct SegmentView {
    start_byte: usize,
    end_byte: usize,
    highlight: bool,
    match_index: Option<usize>,
}

#[derive(Serialize)]
struct MatchView<'a> {
    project1: &'a str,
    project2: &'a str,
    match_index: usize,
    location1: String,
    location2: String,
    verdict: &'static str,
    segments1: Option<&'a [SegmentView]>,
    segments2: Option<&'a [SegmentView]>,
}

/// Display one match of a project pair: both locations, the stored verdict,
/// and (when `projects_dir` is given) each side's file partitioned into
/// highlight segments covering every match of the pair that touches that file.
pub fn show_match_command(
    report_path: &str,
    verdicts_path: &str,
    pair_index: usize,
    match_index: usize,
    projects_dir: Option<&str>,
    json: bool,
) -> Result<()> {
    let report = Report::from_path(report_path)
        .with_context(|| format!("Failed to load report at {report_path}"))?;

    let pair = report
        .project_pairs
        .get(pair_index)
        .ok_or_else(|| anyhow!("no project pair with index {pair_index}"))?;
    let m = pair
        .matches
        .get(match_index)
        .ok_or_else(|| anyhow!("no match with index {match_index} in pair {pair_index}"))?;

    let Loaded { store, warning } = VerdictsFile::load(verdicts_path);
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }
    let verdict = store.verdicts.get_verdict(&m.location1, &m.location2);

    // A missing or unreadable source file degrades to no highlighting.
    let side1 = projects_dir
        .and_then(|dir| warn_on_error(partition_side(dir, pair, &m.location1, Side::First)));
    let side2 = projects_dir
        .and_then(|dir| warn_on_error(partition_side(dir, pair, &m.location2, Side::Second)));

    if json {
        let view = MatchView {
            project1: &pair.project1,
            project2: &pair.project2,
            match_index,
            location1: m.location1.to_string(),
            location2: m.location2.to_string(),
            verdict: verdict_label(verdict),
            segments1: side1.as_ref().map(|p| p.segments.as_slice()),
            segments2: side2.as_ref().map(|p| p.segments.as_slice()),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Match {match_index} of {} <-> {}", pair.project1, pair.project2);
    println!("  {}: {}", pair.project1, m.location1);
    println!("  {}: {}", pair.project2, m.location2);
    println!("  Verdict: {}", verdict_label(verdict));

    if let Some(side1) = &side1 {
        print_side(&pair.project1, &m.location1, side1);
    }
    if let Some(side2) = &side2 {
        print_side(&pair.project2, &m.location2, side2);
    }

    Ok(())
}

fn warn_on_error(side: Result<PartitionedFile>) -> Option<PartitionedFile> {
    match side {
        Ok(partitioned) => Some(partitioned),
        Err(e) => {
            eprintln!("Warning: {e:#}");
            None
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    First,
    Second,
}

struct PartitionedFile {
    total_bytes: usize,
    segments: Vec<SegmentView>,
}

/// Read one side's file and partition it against every match of the pair
/// that lands in the same file on that side. Segment provenance is remapped
/// from span indices to match indices on the way out.
fn partition_side(
    projects_dir: &str,
    pair: &ProjectPair,
    location: &CodeLocation,
    side: Side,
) -> Result<PartitionedFile> {
    let path = Path::new(projects_dir).join(&location.file);
    let data = std::fs::read(&path)
        .with_context(|| format!("Failed to read source file at {}", path.display()))?;

    let mut spans = Vec::new();
    let mut match_indices = Vec::new();
    for (index, m) in pair.matches.iter().enumerate() {
        let loc = match side {
            Side::First => &m.location1,
            Side::Second => &m.location2,
        };
        if loc.file == location.file {
            spans.push(HighlightSpan::new(loc.start_byte, loc.end_byte));
            match_indices.push(index);
        }
    }

    let segments = partition(data.len(), &spans)
        .into_iter()
        .map(|segment| SegmentView {
            start_byte: segment.start_byte,
            end_byte: segment.end_byte,
            highlight: segment.highlight,
            match_index: segment.source.map(|span_index| match_indices[span_index]),
        })
        .collect();
    Ok(PartitionedFile { total_bytes: data.len(), segments })
}

fn print_side(project: &str, location: &CodeLocation, partitioned: &PartitionedFile) {
    println!("--- {project}: {} ({} bytes) ---", location.file, partitioned.total_bytes);
    for segment in &partitioned.segments {
        let marker = match segment.match_index {
            Some(index) => format!(" * match {index}"),
            None => String::new(),
        };
        println!("  [{:>6}..{:>6}]{marker}", segment.start_byte, segment.end_byte);
    }
}
