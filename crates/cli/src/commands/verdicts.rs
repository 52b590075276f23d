use std::str::FromStr;

use anyhow::{Context, Result};
use review_core::storage::{Loaded, VerdictsFile};
use review_core::verdicts::Verdict;

use crate::{parse_location, verdict_label};

/// Record a verdict for a pair of locations, overwriting any previous one.
pub fn set_verdict_command(
    verdicts_path: &str,
    location1: &str,
    location2: &str,
    verdict: &str,
) -> Result<()> {
    let location1 = parse_location(location1)?;
    let location2 = parse_location(location2)?;
    let verdict =
        Verdict::from_str(verdict).with_context(|| format!("invalid verdict {verdict:?}"))?;

    let Loaded { store: mut file, warning } = VerdictsFile::load(verdicts_path);
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }

    file.verdicts.set_verdict(&location1, &location2, verdict)?;

    // The in-memory store stays authoritative; a failed save is a warning,
    // not an error.
    if let Err(e) = file.save() {
        eprintln!("Warning: {e}. The verdict was not saved.");
    } else {
        println!("Recorded {verdict} for {location1} <-> {location2}");
    }

    Ok(())
}

/// Print the stored verdict for a pair of locations, or `no-verdict`.
pub fn get_verdict_command(verdicts_path: &str, location1: &str, location2: &str) -> Result<()> {
    let location1 = parse_location(location1)?;
    let location2 = parse_location(location2)?;

    let Loaded { store: file, warning } = VerdictsFile::load(verdicts_path);
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }

    let verdict = file.verdicts.get_verdict(&location1, &location2);
    println!("{}", verdict_label(verdict));

    Ok(())
}
