//! review-core
//!
//! Core library for reviewing plagiarism-detection results.
//!
//! This crate defines the data model for code locations and matches, the
//! verdict stores that record reviewer decisions (a flat pair-to-verdict map
//! and an equivalence-relation variant with transitive inference), the byte
//! range partitioner used to build highlight segments for display, the typed
//! interface to FUNGUS report files, and verdicts-file persistence.
//!
//! All substantive logic lives here so it is fully testable and reusable
//! from multiple frontends (the one-shot CLI today, interactive shells
//! later).

pub mod highlight;
pub mod model;
pub mod report;
pub mod storage;
pub mod verdicts;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
