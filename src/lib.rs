//! Framespan turns artist-typed frame-range text into a canonical render list.
//!
//! The input grammar is forgiving: `"1, 5-10, -3--1, 7"` is four rangelets,
//! each either a single frame or a `low-high` pair, with negative bounds
//! tolerated (`-3--1` is the pair -3 to -1). Analysis runs in three stages:
//!
//! 1. **Validate**: a character-level state machine checks each rangelet and
//!    masks numeric minus signs so they cannot be confused with the bound
//!    separator ([`validate_rangelet`])
//! 2. **Split**: a validated rangelet becomes an ordered [`FrameSpan`],
//!    clamping negative bounds to frame 0 ([`split_rangelet`])
//! 3. **Normalize**: spans are sorted numerically and merged into a minimal
//!    covering set with a canonical text form ([`normalize_spans`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Best-effort**: a malformed rangelet is dropped, never aborting its
//!   siblings, and no error crosses the analyzer boundary.
//! - **Pure and reentrant**: analysis holds no shared state and is safe to
//!   call concurrently; verbosity is a plain parameter, not process state.
//!
//! ```
//! use framespan::{DiagnosticFlags, analyze_frame_ranges};
//!
//! let ranges = analyze_frame_ranges("4-2, 1, +6", DiagnosticFlags::default());
//! assert_eq!(ranges.canonical, "1-4,6");
//! ```
#![forbid(unsafe_code)]

mod analyze;
mod core;
mod error;
mod normalize;
mod rangelet;

pub use analyze::{analyze_frame_ranges, rangelet_tokens};
pub use core::{DiagnosticFlags, FrameIndex, FrameSpan};
pub use error::{FramespanError, FramespanResult};
pub use normalize::{NormalizedRanges, normalize_spans};
pub use rangelet::{split_rangelet, validate_rangelet};
