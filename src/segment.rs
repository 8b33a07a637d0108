// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use crate::errors::MsaError;

/// An inclusive range of native residue numbers, e.g. `12-134`. A sequence numbered
/// discontinuously (say, two structural fragments) carries several of these, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    start: i64,
    stop: i64,
}

impl Segment {
    pub fn new(start: i64, stop: i64) -> Result<Self, MsaError> {
        if start > stop {
            return Err(MsaError::InvalidRange { start, stop });
        }
        Ok(Segment { start, stop })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Number of residues covered (both ends included); saturates at `usize::MAX`.
    pub fn residue_count(&self) -> usize {
        usize::try_from(self.stop.abs_diff(self.start))
            .unwrap_or(usize::MAX)
            .saturating_add(1)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.stop)
    }
}
