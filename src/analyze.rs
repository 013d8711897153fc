//! The frame-range analyzer: validation, splitting and normalization tied
//! together behind a single best-effort entry point.

use tracing::debug;

use crate::core::DiagnosticFlags;
use crate::normalize::{self, NormalizedRanges};
use crate::rangelet;

/// Splits a raw expression into rangelet tokens, stripping the characters
/// the analyzer ignores (spaces and `+`).
pub fn rangelet_tokens(raw: &str) -> Vec<String> {
    let cleaned: String = raw.chars().filter(|ch| !matches!(ch, ' ' | '+')).collect();
    cleaned.split(',').map(str::to_owned).collect()
}

/// Analyzes a raw frame-range expression such as `"1,5-10,-3--1,7"`.
///
/// Every token runs through validation and splitting; malformed tokens are
/// dropped without affecting their siblings, and the survivors are merged
/// into a minimal ascending set of spans. An input with no valid token
/// yields an empty result rather than an error. The call is pure: repeated
/// or concurrent invocations with the same input produce the same output.
pub fn analyze_frame_ranges(raw: &str, flags: DiagnosticFlags) -> NormalizedRanges {
    let mut spans = Vec::new();
    for token in rangelet_tokens(raw) {
        let Some(masked) = rangelet::validate_rangelet(&token) else {
            if flags.debug {
                debug!(token = %token, "dropping malformed rangelet");
            }
            continue;
        };
        if let Some(span) = rangelet::split_rangelet(&masked, flags) {
            spans.push(span);
        }
    }

    let ranges = normalize::normalize_spans(spans);
    if flags.debug {
        debug!(canonical = %ranges.canonical, "normalized frame ranges");
    }
    ranges
}
