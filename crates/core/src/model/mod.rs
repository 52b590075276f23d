//! Core data model for reviewed code: locations, matches, project pairs, and
//! loader warnings.
//!
//! These are small serde-friendly value types. Anything that reaches a
//! verdict store goes through [`CodeLocation::validate`], so a location that
//! was built by hand or deserialized from an untrusted file is checked before
//! it can key a verdict.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a code location fails structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The file name is empty.
    #[error("code location has an empty file name (bytes {start_byte}..{end_byte})")]
    EmptyFile { start_byte: usize, end_byte: usize },

    /// The byte span is empty or inverted.
    ///
    /// One source revision only required `end_byte > 0`; we enforce the
    /// stricter `end_byte > start_byte` everywhere so a location always names
    /// a non-empty span.
    #[error("code location in {file:?} has an invalid span {start_byte}..{end_byte}")]
    InvalidSpan { file: String, start_byte: usize, end_byte: usize },
}

/// A byte range in a named file belonging to one student project.
///
/// Immutable value type with structural equality: two locations are the same
/// code snippet iff file, start, and end all match exactly. Ordering is by
/// (file, start, end), which is the order matches are listed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CodeLocation {
    /// File path, relative to the student's project directory.
    pub file: String,
    /// First byte of the snippet (inclusive).
    pub start_byte: usize,
    /// One past the last byte of the snippet (exclusive).
    pub end_byte: usize,
}

impl CodeLocation {
    /// Build a validated location.
    pub fn new(
        file: impl Into<String>,
        start_byte: usize,
        end_byte: usize,
    ) -> Result<Self, LocationError> {
        let location = Self { file: file.into(), start_byte, end_byte };
        location.validate()?;
        Ok(location)
    }

    /// Check the structural invariants: non-empty file, `end_byte > start_byte`.
    ///
    /// Non-negativity of the byte offsets is carried by the unsigned types.
    pub fn validate(&self) -> Result<(), LocationError> {
        if self.file.is_empty() {
            return Err(LocationError::EmptyFile {
                start_byte: self.start_byte,
                end_byte: self.end_byte,
            });
        }
        if self.end_byte <= self.start_byte {
            return Err(LocationError::InvalidSpan {
                file: self.file.clone(),
                start_byte: self.start_byte,
                end_byte: self.end_byte,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.file, self.start_byte, self.end_byte)
    }
}

/// A matched pair of code snippets, one per project side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub location1: CodeLocation,
    pub location2: CodeLocation,
}

impl Match {
    pub fn new(location1: CodeLocation, location2: CodeLocation) -> Self {
        Self { location1, location2 }
    }
}

/// A pair of student projects with the matches found between them.
///
/// `total_num_matches` is the count before any verdict filtering, so a
/// filtered listing can still report how many matches the pair had overall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPair {
    pub project1: String,
    pub project2: String,
    pub matches: Vec<Match>,
    pub total_num_matches: usize,
}

impl ProjectPair {
    pub fn new(project1: impl Into<String>, project2: impl Into<String>, matches: Vec<Match>) -> Self {
        let total_num_matches = matches.len();
        Self { project1: project1.into(), project2: project2.into(), matches, total_num_matches }
    }
}

/// A warning produced while loading a report file.
///
/// Carried through for display; the reviewer sees these in a warnings table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Warning {
    pub warn_type: String,
    pub file: String,
    pub message: String,
}

impl Warning {
    pub fn new(
        warn_type: impl Into<String>,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { warn_type: warn_type.into(), file: file.into(), message: message.into() }
    }
}
