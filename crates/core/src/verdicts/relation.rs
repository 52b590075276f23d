use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::CodeLocation;
use crate::verdicts::{location_key, VerdictError};

/// Read result of the equivalence-relation store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgment {
    /// The two snippets are (directly or transitively) the same plagiarized code.
    Accept,
    /// The two snippets are known to be different.
    Reject,
    /// Nothing is known about the pair.
    Unknown,
}

impl Judgment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Judgment::Accept => "accept",
            Judgment::Reject => "reject",
            Judgment::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Judgment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equivalence relation over code locations with explicit distinctness.
///
/// Accepted pairs are merged into equivalence classes, so acceptance is
/// transitive: `accept(a, b)` and `accept(b, c)` imply `verdict(a, c)` is
/// [`Judgment::Accept`]. Rejection is recorded as a distinctness fact between
/// two classes; it propagates through class membership but does not compose
/// with itself (`reject(a, b)` and `reject(b, c)` say nothing about `(a, c)`).
///
/// A call that would contradict previously established facts fails with
/// [`VerdictError::ContradictoryVerdict`] and leaves the relation exactly as
/// it was; all checks run before any mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEquivalenceRelation {
    /// Class id for each classified location, keyed by [`location_key`].
    class_ids: BTreeMap<String, u32>,
    /// Unordered pairs of class ids known to be different, stored as (min, max).
    distinct: BTreeSet<(u32, u32)>,
    /// Next class id to allocate.
    next_class_id: u32,
}

impl CodeEquivalenceRelation {
    /// Create an empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a pair of code snippets as plagiarized (equivalent).
    pub fn accept(
        &mut self,
        location1: &CodeLocation,
        location2: &CodeLocation,
    ) -> Result<(), VerdictError> {
        location1.validate()?;
        location2.validate()?;

        let key1 = location_key(location1);
        let key2 = location_key(location2);
        if key1 == key2 {
            // Reflexivity is structural; nothing to record.
            return Ok(());
        }

        match (self.class_ids.get(&key1).copied(), self.class_ids.get(&key2).copied()) {
            (None, None) => {
                let id = self.fresh_class_id();
                self.class_ids.insert(key1, id);
                self.class_ids.insert(key2, id);
            }
            (Some(id), None) => {
                self.class_ids.insert(key2, id);
            }
            (None, Some(id)) => {
                self.class_ids.insert(key1, id);
            }
            (Some(id1), Some(id2)) if id1 == id2 => {}
            (Some(id1), Some(id2)) => {
                if self.are_distinct(id1, id2) {
                    return Err(VerdictError::ContradictoryVerdict);
                }
                self.merge_classes(id1, id2);
            }
        }
        Ok(())
    }

    /// Mark a pair of code snippets as *not* plagiarized (distinct).
    pub fn reject(
        &mut self,
        location1: &CodeLocation,
        location2: &CodeLocation,
    ) -> Result<(), VerdictError> {
        location1.validate()?;
        location2.validate()?;

        let key1 = location_key(location1);
        let key2 = location_key(location2);
        if key1 == key2 {
            // A snippet cannot be distinct from itself.
            return Err(VerdictError::ContradictoryVerdict);
        }

        let existing1 = self.class_ids.get(&key1).copied();
        let existing2 = self.class_ids.get(&key2).copied();
        if let (Some(id1), Some(id2)) = (existing1, existing2) {
            if id1 == id2 {
                return Err(VerdictError::ContradictoryVerdict);
            }
        }

        // No contradiction possible past this point; safe to allocate.
        let id1 = match existing1 {
            Some(id) => id,
            None => {
                let id = self.fresh_class_id();
                self.class_ids.insert(key1, id);
                id
            }
        };
        let id2 = match existing2 {
            Some(id) => id,
            None => {
                let id = self.fresh_class_id();
                self.class_ids.insert(key2, id);
                id
            }
        };
        self.distinct.insert(ordered_pair(id1, id2));
        Ok(())
    }

    /// The verdict for a pair of code snippets.
    ///
    /// Identical locations always read as [`Judgment::Accept`] regardless of
    /// stored state. Pure; never mutates the relation.
    pub fn verdict(&self, location1: &CodeLocation, location2: &CodeLocation) -> Judgment {
        let key1 = location_key(location1);
        let key2 = location_key(location2);
        if key1 == key2 {
            return Judgment::Accept;
        }

        match (self.class_ids.get(&key1), self.class_ids.get(&key2)) {
            (Some(id1), Some(id2)) if id1 == id2 => Judgment::Accept,
            (Some(&id1), Some(&id2)) if self.are_distinct(id1, id2) => Judgment::Reject,
            _ => Judgment::Unknown,
        }
    }

    /// Encode the relation as a JSON string suitable for a verdicts file.
    ///
    /// The distinctness set is encoded as an array of pairs; deserialization
    /// rebuilds the set with the same membership semantics.
    pub fn serialize(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reconstruct a relation from the output of a previous [`Self::serialize`].
    ///
    /// Empty (or whitespace-only) input yields a fresh empty relation.
    pub fn deserialize(data: &str) -> Result<Self, serde_json::Error> {
        if data.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(data)
    }

    fn fresh_class_id(&mut self) -> u32 {
        let id = self.next_class_id;
        self.next_class_id += 1;
        id
    }

    fn are_distinct(&self, id1: u32, id2: u32) -> bool {
        self.distinct.contains(&ordered_pair(id1, id2))
    }

    /// Merge two classes, keeping the smaller id.
    ///
    /// Every location in the dissolved class is reassigned, and distinctness
    /// facts naming the dissolved id are rewritten to the surviving id so
    /// they are not lost.
    fn merge_classes(&mut self, id1: u32, id2: u32) {
        let (kept, dissolved) = if id1 < id2 { (id1, id2) } else { (id2, id1) };

        for id in self.class_ids.values_mut() {
            if *id == dissolved {
                *id = kept;
            }
        }

        let old_distinct = std::mem::take(&mut self.distinct);
        for (a, b) in old_distinct {
            let a = if a == dissolved { kept } else { a };
            let b = if b == dissolved { kept } else { b };
            self.distinct.insert(ordered_pair(a, b));
        }
    }
}

fn ordered_pair(id1: u32, id2: u32) -> (u32, u32) {
    if id1 <= id2 {
        (id1, id2)
    } else {
        (id2, id1)
    }
}
