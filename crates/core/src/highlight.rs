//! Byte-range partitioning for source highlighting.
//!
//! Given the length of a displayed file and the (possibly overlapping) byte
//! ranges that should be highlighted, [`partition`] computes the minimal
//! ordered list of disjoint segments covering the whole buffer, each marked
//! highlighted or not, so a display layer can render the file as a flat
//! sequence of spans.

use serde::{Deserialize, Serialize};

/// An input byte range to highlight. The range's index in the input slice is
/// its provenance handle; callers keep any match/occurrence metadata keyed by
/// that index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start_byte: usize,
    pub end_byte: usize,
}

impl HighlightSpan {
    pub fn new(start_byte: usize, end_byte: usize) -> Self {
        Self { start_byte, end_byte }
    }
}

/// One segment of the partitioned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start_byte: usize,
    pub end_byte: usize,
    /// True iff this segment is fully contained in at least one input span.
    pub highlight: bool,
    /// For highlighted segments, the index of the owning input span: the
    /// overlapping span with the smallest start, ties broken by input order.
    /// `None` for non-highlighted segments.
    pub source: Option<usize>,
}

/// Partition `[0, total_bytes)` against the given highlight spans.
///
/// The output segments are sorted ascending, contiguous, non-overlapping,
/// and cover the buffer exactly. Every input span's start is some segment's
/// start and every input span's end is some segment's end, so highlighted
/// regions begin and end exactly at match boundaries even when spans overlap.
/// A segment is highlighted iff it lies inside at least one input span.
///
/// Spans are expected to satisfy `start < end <= total_bytes`; anything else
/// is ignored (an out-of-range end is clamped to the buffer). An empty
/// buffer partitions into no segments.
pub fn partition(total_bytes: usize, spans: &[HighlightSpan]) -> Vec<Segment> {
    if total_bytes == 0 {
        return Vec::new();
    }

    // Clamp to the buffer and drop empty/invalid spans, remembering each
    // surviving span's original index for provenance.
    let clamped: Vec<(usize, HighlightSpan)> = spans
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            let end = s.end_byte.min(total_bytes);
            (s.start_byte < end).then(|| (i, HighlightSpan::new(s.start_byte, end)))
        })
        .collect();

    // Cut points: the buffer edges plus every span boundary.
    let mut boundaries = vec![0, total_bytes];
    for (_, span) in &clamped {
        boundaries.push(span.start_byte);
        boundaries.push(span.end_byte);
    }
    boundaries.sort_unstable();
    boundaries.dedup();

    boundaries
        .windows(2)
        .map(|w| {
            let (start, end) = (w[0], w[1]);
            let highlight =
                clamped.iter().any(|(_, s)| s.start_byte <= start && end <= s.end_byte);
            let source = if highlight {
                clamped
                    .iter()
                    .filter(|(_, s)| s.start_byte < end && s.end_byte > start)
                    .min_by_key(|(i, s)| (s.start_byte, *i))
                    .map(|(i, _)| *i)
            } else {
                None
            };
            Segment { start_byte: start, end_byte: end, highlight, source }
        })
        .collect()
}
