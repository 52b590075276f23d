use std::path::Path;

use anyhow::{Context, Result};
use review_core::storage::{load_store, save_store, Loaded};
use review_core::verdicts::CodeEquivalenceRelation;

use crate::parse_location;

/// Record that two locations hold the same plagiarized code.
///
/// Fails without touching the relation file if the pair was previously
/// established as distinct.
pub fn accept_command(relation_path: &str, location1: &str, location2: &str) -> Result<()> {
    let location1 = parse_location(location1)?;
    let location2 = parse_location(location2)?;

    let mut relation = load_relation(relation_path);
    relation
        .accept(&location1, &location2)
        .with_context(|| format!("cannot accept {location1} <-> {location2}"))?;

    if save_relation(relation_path, &relation) {
        println!("Accepted {location1} <-> {location2}");
    }

    Ok(())
}

/// Record that two locations hold definitely different code.
///
/// Fails without touching the relation file if the pair was previously
/// established as equivalent (directly or transitively).
pub fn reject_command(relation_path: &str, location1: &str, location2: &str) -> Result<()> {
    let location1 = parse_location(location1)?;
    let location2 = parse_location(location2)?;

    let mut relation = load_relation(relation_path);
    relation
        .reject(&location1, &location2)
        .with_context(|| format!("cannot reject {location1} <-> {location2}"))?;

    if save_relation(relation_path, &relation) {
        println!("Rejected {location1} <-> {location2}");
    }

    Ok(())
}

/// Print the relation's judgment for two locations: accept, reject, or
/// unknown.
pub fn judge_command(relation_path: &str, location1: &str, location2: &str) -> Result<()> {
    let location1 = parse_location(location1)?;
    let location2 = parse_location(location2)?;

    let relation = load_relation(relation_path);
    println!("{}", relation.verdict(&location1, &location2));

    Ok(())
}

fn load_relation(path: &str) -> CodeEquivalenceRelation {
    let Loaded { store, warning } = load_store::<CodeEquivalenceRelation>(Path::new(path));
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }
    store
}

/// Persist the relation, warning instead of failing when the write does not
/// go through. The in-memory relation stays authoritative either way.
fn save_relation(path: &str, relation: &CodeEquivalenceRelation) -> bool {
    match save_store(Path::new(path), relation) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: {e}. The decision was not saved.");
            false
        }
    }
}
