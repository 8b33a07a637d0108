// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod alignment;
pub mod config;
pub mod errors;
pub mod merge;
pub mod residues;
mod runner;
pub mod segment;
pub mod seq;
pub mod sequence;

use crate::errors::MsaError;

pub use crate::alignment::Alignment;
pub use crate::merge::{merge, plan_merge, ColumnSlot, MergePlan};
pub use crate::segment::Segment;
pub use crate::sequence::{Header, Sequence, GAP_CHAR, MERGE_GAP_CHAR};

pub fn run() -> Result<(), MsaError> {
    runner::run()
}
