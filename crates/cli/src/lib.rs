use anyhow::{anyhow, Context, Result};
use review_core::model::CodeLocation;
use review_core::verdicts::Verdict;

pub mod commands;

/// Parse a location given on the command line as `file:start-end`.
///
/// The span is split off the *last* colon, so file names containing colons
/// work: `C:\work\main.c:10-50`.
pub fn parse_location(input: &str) -> Result<CodeLocation> {
    let (file, span) = input
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("expected file:start-end, got {input:?}"))?;
    let (start, end) = span
        .split_once('-')
        .ok_or_else(|| anyhow!("expected a start-end byte span, got {span:?}"))?;
    let start_byte: usize =
        start.trim().parse().with_context(|| format!("invalid start byte {start:?}"))?;
    let end_byte: usize =
        end.trim().parse().with_context(|| format!("invalid end byte {end:?}"))?;
    CodeLocation::new(file, start_byte, end_byte)
        .with_context(|| format!("invalid location {input:?}"))
}

/// The label shown for a possibly-absent verdict.
pub fn verdict_label(verdict: Option<Verdict>) -> &'static str {
    match verdict {
        Some(v) => v.as_str(),
        None => Verdict::NO_VERDICT_LABEL,
    }
}
