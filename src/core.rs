use std::fmt;

use crate::error::{FramespanError, FramespanResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameSpan {
    pub low: FrameIndex,
    pub high: FrameIndex, // inclusive
}

impl FrameSpan {
    pub fn new(low: FrameIndex, high: FrameIndex) -> FramespanResult<Self> {
        if low.0 > high.0 {
            return Err(FramespanError::validation("FrameSpan low must be <= high"));
        }
        Ok(Self { low, high })
    }

    pub fn single(frame: FrameIndex) -> Self {
        Self {
            low: frame,
            high: frame,
        }
    }

    pub fn len_frames(self) -> u64 {
        (self.high.0 - self.low.0).saturating_add(1)
    }

    pub fn contains(self, frame: FrameIndex) -> bool {
        self.low.0 <= frame.0 && frame.0 <= self.high.0
    }
}

/// Canonical token form: `7` for a single frame, `3-10` otherwise.
impl fmt::Display for FrameSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low.0)
        } else {
            write!(f, "{}-{}", self.low.0, self.high.0)
        }
    }
}

/// Verbosity switches for advisory diagnostics. They change what gets
/// logged, never which rangelets survive analysis.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct DiagnosticFlags {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub debug: bool,
}
