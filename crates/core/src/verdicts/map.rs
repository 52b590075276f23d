use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::CodeLocation;
use crate::verdicts::{pair_key, Verdict, VerdictError};

/// Flat map from an unordered pair of code locations to a verdict.
///
/// The map is keyed by [`pair_key`], so querying `(a, b)` and `(b, a)` always
/// yields the same result. Setting a verdict on a pair that already has one
/// silently overwrites it; there is no contradiction checking in this mode.
///
/// A `BTreeMap` keeps the serialized encoding deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictMap {
    verdicts: BTreeMap<String, Verdict>,
}

impl VerdictMap {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `verdict` for the pair `(location1, location2)`.
    ///
    /// Fails with [`VerdictError::InvalidLocation`] if either location is
    /// structurally invalid; the store is left untouched in that case. On
    /// success any previous verdict for that exact pair is overwritten.
    pub fn set_verdict(
        &mut self,
        location1: &CodeLocation,
        location2: &CodeLocation,
        verdict: Verdict,
    ) -> Result<(), VerdictError> {
        location1.validate()?;
        location2.validate()?;
        self.verdicts.insert(pair_key(location1, location2), verdict);
        Ok(())
    }

    /// Look up the verdict for a pair, in either argument order.
    ///
    /// `None` means no verdict was ever recorded for the pair.
    pub fn get_verdict(
        &self,
        location1: &CodeLocation,
        location2: &CodeLocation,
    ) -> Option<Verdict> {
        self.verdicts.get(&pair_key(location1, location2)).copied()
    }

    /// Number of pairs with a recorded verdict.
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Encode the store as a JSON string suitable for a verdicts file.
    pub fn serialize(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reconstruct a store from the output of a previous [`Self::serialize`].
    ///
    /// Empty (or whitespace-only) input yields a fresh empty store rather
    /// than an error, so a just-created verdicts file loads cleanly.
    pub fn deserialize(data: &str) -> Result<Self, serde_json::Error> {
        if data.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(data)
    }
}
