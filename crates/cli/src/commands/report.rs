use std::str::FromStr;

use anyhow::{Context, Result};
use review_core::model::Warning;
use review_core::report::{count_verdicts, filter_matches, Report, VerdictCounts};
use review_core::storage::{Loaded, VerdictsFile};
use review_core::verdicts::Verdict;
use serde::Serialize;

#[derive(Serialize)]
struct PairSummary<'a> {
    project1: &'a str,
    project2: &'a str,
    total_num_matches: usize,
}

#[derive(Serialize)]
struct ReportSummary<'a> {
    project_pairs: Vec<PairSummary<'a>>,
    warnings: &'a [Warning],
}

#[derive(Serialize)]
struct PairListing<'a> {
    project1: &'a str,
    project2: &'a str,
    total_num_matches: usize,
    shown_matches: usize,
    counts: VerdictCounts,
}

/// Summarize a report file: project pairs ordered by match count, plus any
/// warnings the detection tool emitted.
pub fn report_info_command(report_path: &str, json: bool) -> Result<()> {
    let report = Report::from_path(report_path)
        .with_context(|| format!("Failed to load report at {report_path}"))?;

    if json {
        let summary = ReportSummary {
            project_pairs: report
                .project_pairs
                .iter()
                .map(|pair| PairSummary {
                    project1: &pair.project1,
                    project2: &pair.project2,
                    total_num_matches: pair.total_num_matches,
                })
                .collect(),
            warnings: &report.warnings,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Project pairs:");
    if report.project_pairs.is_empty() {
        println!("(none)");
    }
    for (index, pair) in report.project_pairs.iter().enumerate() {
        println!(
            "  [{index}] {} <-> {} ({} matches)",
            pair.project1, pair.project2, pair.total_num_matches
        );
    }

    if !report.warnings.is_empty() {
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  [{}] {}: {}", warning.warn_type, warning.file, warning.message);
        }
    }

    Ok(())
}

/// List project pairs with per-pair verdict tallies, optionally filtered to
/// matches carrying particular verdicts.
pub fn pairs_command(report_path: &str, verdicts_path: &str, show: &[String], json: bool) -> Result<()> {
    let report = Report::from_path(report_path)
        .with_context(|| format!("Failed to load report at {report_path}"))?;

    let Loaded { store, warning } = VerdictsFile::load(verdicts_path);
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }
    let verdicts = store.verdicts;

    let filters = parse_show_filters(show)?;
    let pairs = match &filters {
        Some(filters) => filter_matches(&report.project_pairs, &verdicts, filters),
        None => report.project_pairs,
    };

    if json {
        let listing: Vec<PairListing> = pairs
            .iter()
            .map(|pair| PairListing {
                project1: &pair.project1,
                project2: &pair.project2,
                total_num_matches: pair.total_num_matches,
                shown_matches: pair.matches.len(),
                counts: count_verdicts(pair, &verdicts),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if pairs.is_empty() {
        println!("No project pairs to show.");
        return Ok(());
    }

    for (index, pair) in pairs.iter().enumerate() {
        let counts = count_verdicts(pair, &verdicts);
        println!(
            "[{index}] {} <-> {} ({} of {} matches shown)",
            pair.project1,
            pair.project2,
            pair.matches.len(),
            pair.total_num_matches
        );
        println!(
            "      plagiarism: {}  potential: {}  none: {}  unjudged: {}",
            counts.plagiarism, counts.potential_plagiarism, counts.no_plagiarism, counts.no_verdict
        );
    }

    Ok(())
}

/// Turn `--show` labels into the verdict filter understood by
/// [`filter_matches`]. `no-verdict` selects unjudged matches. An empty list
/// means no filtering at all.
fn parse_show_filters(show: &[String]) -> Result<Option<Vec<Option<Verdict>>>> {
    if show.is_empty() {
        return Ok(None);
    }
    let mut filters = Vec::with_capacity(show.len());
    for label in show {
        if label == Verdict::NO_VERDICT_LABEL {
            filters.push(None);
        } else {
            let verdict = Verdict::from_str(label)
                .with_context(|| format!("invalid --show value {label:?}"))?;
            filters.push(Some(verdict));
        }
    }
    Ok(Some(filters))
}
