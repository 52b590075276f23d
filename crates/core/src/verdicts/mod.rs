//! Verdict stores: durable reviewer decisions about pairs of code locations.
//!
//! Two store designs are provided:
//!
//! - [`VerdictMap`]: a flat map from an unordered location pair to one of
//!   three plagiarism labels. Overwriting a pair's verdict is allowed (last
//!   write wins). This is the primary store.
//! - [`CodeEquivalenceRelation`]: an equivalence-class relation over
//!   locations with accept/reject judgments, transitive inference, and
//!   strict contradiction rejection. An alternate, stronger mode; its
//!   overwrite semantics are deliberately different and the two are never
//!   mixed in one file.
//!
//! Both stores are symmetric in their arguments and serialize to
//! deterministic JSON that round-trips to an equal store.

mod map;
mod relation;

pub use map::VerdictMap;
pub use relation::{CodeEquivalenceRelation, Judgment};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CodeLocation, LocationError};

/// Separator between fields in a location key.
const KEY_SEPARATOR: char = '|';
/// Escape character used to keep separators in file names unambiguous.
const KEY_ESCAPE: char = '\\';

/// A reviewer's verdict on a matched pair of code snippets.
///
/// The "no verdict yet" state is deliberately not a variant: stores return
/// `Option<Verdict>` and `None` means the pair was never judged. The sentinel
/// label `"no-verdict"` therefore cannot be stored, and
/// [`Verdict::from_str`](std::str::FromStr) rejects it like any other
/// unrecognized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// The reviewer decided the match is not plagiarism.
    NoPlagiarism,
    /// Suspicious, but the reviewer is not certain.
    PotentialPlagiarism,
    /// Confirmed plagiarism.
    Plagiarism,
}

impl Verdict {
    /// The label used in verdict files and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::NoPlagiarism => "no-plagiarism",
            Verdict::PotentialPlagiarism => "potential-plagiarism",
            Verdict::Plagiarism => "plagiarism",
        }
    }

    /// Label printed when a pair has no stored verdict.
    pub const NO_VERDICT_LABEL: &'static str = "no-verdict";
}

impl std::str::FromStr for Verdict {
    type Err = VerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-plagiarism" => Ok(Verdict::NoPlagiarism),
            "potential-plagiarism" => Ok(Verdict::PotentialPlagiarism),
            "plagiarism" => Ok(Verdict::Plagiarism),
            other => Err(VerdictError::InvalidVerdict(other.to_string())),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for verdict store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerdictError {
    /// One of the locations failed structural validation.
    ///
    /// The store is left unmodified.
    #[error("invalid code location: {0}")]
    InvalidLocation(#[from] LocationError),

    /// A verdict label that is not one of the three legal labels.
    ///
    /// This includes the `"no-verdict"` sentinel, which may never be set
    /// explicitly.
    #[error("unrecognized verdict label {0:?}")]
    InvalidVerdict(String),

    /// An accept/reject call conflicts with previously established facts.
    ///
    /// Raised by the equivalence-relation store only; the failed call does
    /// not mutate the relation.
    #[error("contradictory verdict")]
    ContradictoryVerdict,
}

/// Canonical string key for a single location: `file|start|end`, with `\` and
/// `|` in the file name escaped so the key is injective.
pub fn location_key(location: &CodeLocation) -> String {
    let mut escaped = String::with_capacity(location.file.len());
    for c in location.file.chars() {
        if c == KEY_ESCAPE || c == KEY_SEPARATOR {
            escaped.push(KEY_ESCAPE);
        }
        escaped.push(c);
    }
    format!("{escaped}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{}", location.start_byte, location.end_byte)
}

/// Canonical, order-independent key for a pair of locations.
///
/// The two location keys are joined with the separator, lexicographically
/// smaller key first, so `pair_key(a, b) == pair_key(b, a)` always holds.
pub fn pair_key(location1: &CodeLocation, location2: &CodeLocation) -> String {
    let key1 = location_key(location1);
    let key2 = location_key(location2);
    if key1 <= key2 {
        format!("{key1}{KEY_SEPARATOR}{key2}")
    } else {
        format!("{key2}{KEY_SEPARATOR}{key1}")
    }
}
