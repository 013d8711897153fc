//! Range normalization: numeric ordering and interval merging.

use crate::core::FrameSpan;

/// Result of one analysis: the canonical text form plus the merged spans it
/// was derived from. The canonical string always regenerates identically
/// from the span list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedRanges {
    pub canonical: String,
    pub spans: Vec<FrameSpan>,
}

impl NormalizedRanges {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of frames covered by all spans.
    pub fn total_frames(&self) -> u64 {
        self.spans.iter().map(|span| span.len_frames()).sum()
    }
}

/// Sorts spans numerically by their low bound and merges overlapping or
/// adjacent spans into a minimal covering set: after normalization every
/// consecutive pair is separated by a gap of at least one frame.
pub fn normalize_spans(mut spans: Vec<FrameSpan>) -> NormalizedRanges {
    // Zero or one span is already normal.
    if spans.len() > 1 {
        spans.sort_by_key(|span| span.low);
        let mut merged: Vec<FrameSpan> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                // Overlapping or touching (gap < 1): widen the previous span.
                Some(last) if span.low.0 <= last.high.0.saturating_add(1) => {
                    if span.high.0 > last.high.0 {
                        last.high = span.high;
                    }
                }
                _ => merged.push(span),
            }
        }
        spans = merged;
    }

    let canonical = spans
        .iter()
        .map(|span| span.to_string())
        .collect::<Vec<_>>()
        .join(",");
    NormalizedRanges { canonical, spans }
}
