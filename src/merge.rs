// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Reference-anchored merging: a "patch" alignment that shares one row (the anchor) with a
// "master" alignment is folded into the master. The two anchor rows hold the same residues,
// gapped differently; walking them in step yields a plan of merged columns, which is then
// used to rebuild every row of both alignments.

use log::{debug, info};

use crate::alignment::Alignment;
use crate::errors::MsaError;
use crate::sequence::{is_gap, Sequence, MERGE_GAP_CHAR};

/// Where a column of the merged alignment comes from. Indices are columns of the master and
/// patch alignments, respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSlot {
    /// Both anchors have the same residue here.
    Common { master: usize, patch: usize },
    /// The master anchor has a gap here; the patch has no such column.
    MasterOnly { master: usize },
    /// The patch anchor has a gap here; the master has no such column.
    PatchOnly { patch: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    slots: Vec<ColumnSlot>,
}

impl MergePlan {
    pub fn slots(&self) -> &[ColumnSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// (common, master-only, patch-only)
    pub fn origin_counts(&self) -> (usize, usize, usize) {
        self.slots
            .iter()
            .fold((0, 0, 0), |(c, m, p), slot| match slot {
                ColumnSlot::Common { .. } => (c + 1, m, p),
                ColumnSlot::MasterOnly { .. } => (c, m + 1, p),
                ColumnSlot::PatchOnly { .. } => (c, m, p + 1),
            })
    }

    /// Rebuilds a master row: its own characters, padded with merge gaps in patch-only
    /// columns.
    pub fn master_row(&self, residues: &str) -> String {
        let bytes = residues.as_bytes();
        self.slots
            .iter()
            .map(|slot| match *slot {
                ColumnSlot::Common { master, .. } | ColumnSlot::MasterOnly { master } => {
                    bytes[master] as char
                }
                ColumnSlot::PatchOnly { .. } => MERGE_GAP_CHAR,
            })
            .collect()
    }

    /// Rebuilds a patch row: residues in patch-only columns are lower-cased, and master-only
    /// columns are padded with merge gaps.
    pub fn patch_row(&self, residues: &str) -> String {
        let bytes = residues.as_bytes();
        self.slots
            .iter()
            .map(|slot| match *slot {
                ColumnSlot::Common { patch, .. } => bytes[patch] as char,
                ColumnSlot::PatchOnly { patch } => (bytes[patch] as char).to_ascii_lowercase(),
                ColumnSlot::MasterOnly { .. } => MERGE_GAP_CHAR,
            })
            .collect()
    }
}

fn ungapped_upper(seq: &Sequence) -> String {
    seq.ungapped().to_ascii_uppercase()
}

/// Walks the two anchor rows in step. At each point a master gap column is emitted first,
/// then a patch gap column, then a pair of matching residues. Every column of either anchor
/// ends up in exactly one slot.
pub fn plan_merge(master_anchor: &Sequence, patch_anchor: &Sequence) -> Result<MergePlan, MsaError> {
    if ungapped_upper(master_anchor) != ungapped_upper(patch_anchor) {
        return Err(MsaError::AnchorMismatch(format!(
            "residues of '{}' differ between master ({}) and patch ({})",
            master_anchor.id(),
            master_anchor.ungapped(),
            patch_anchor.ungapped()
        )));
    }

    let m = master_anchor.residues().as_bytes();
    let p = patch_anchor.residues().as_bytes();
    let mut slots = Vec::with_capacity(m.len().max(p.len()));
    let (mut i, mut j) = (0, 0);

    while i < m.len() || j < p.len() {
        if i < m.len() && is_gap(m[i] as char) {
            slots.push(ColumnSlot::MasterOnly { master: i });
            i += 1;
        } else if j < p.len() && is_gap(p[j] as char) {
            slots.push(ColumnSlot::PatchOnly { patch: j });
            j += 1;
        } else if i < m.len() && j < p.len() {
            // Both on residues; the ungapped check above makes them the same residue.
            slots.push(ColumnSlot::Common {
                master: i,
                patch: j,
            });
            i += 1;
            j += 1;
        } else {
            // Residues left on one side only: ruled out by the ungapped check.
            return Err(MsaError::AnchorMismatch(format!(
                "anchor '{}' ran out of residues on one side",
                master_anchor.id()
            )));
        }
    }

    Ok(MergePlan { slots })
}

/// Merges `patch` into `master` through the row `anchor_id`, which both must contain. The
/// patch's anchor row is dropped; its other rows are appended after the master's rows. On
/// error, `master` is left unchanged.
pub fn merge(master: &mut Alignment, patch: &Alignment, anchor_id: &str) -> Result<(), MsaError> {
    let master_anchor = master.find_seq_by_id(anchor_id).ok_or_else(|| {
        MsaError::AnchorMismatch(format!("no sequence '{}' in master alignment", anchor_id))
    })?;
    let patch_anchor = patch.find_seq_by_id(anchor_id).ok_or_else(|| {
        MsaError::AnchorMismatch(format!("no sequence '{}' in patch alignment", anchor_id))
    })?;

    let plan = plan_merge(master_anchor, patch_anchor)?;
    let new_rows: Vec<&Sequence> = patch
        .sequences()
        .iter()
        .filter(|seq| !seq.has_accession(anchor_id))
        .collect();
    master.check_new_ids(new_rows.iter().map(|seq| seq.accession()))?;

    let (common, master_only, patch_only) = plan.origin_counts();
    debug!(
        "merge on '{}': {} common, {} master-only, {} patch-only columns",
        anchor_id, common, master_only, patch_only
    );

    let mut sequences: Vec<Sequence> = master
        .sequences()
        .iter()
        .map(|seq| seq.with_residues(plan.master_row(seq.residues())))
        .collect();
    sequences.extend(
        new_rows
            .iter()
            .map(|seq| seq.with_residues(plan.patch_row(seq.residues()))),
    );

    info!(
        "merged {} sequences on '{}': {} -> {} columns",
        new_rows.len(),
        anchor_id,
        master.aln_len(),
        plan.len()
    );
    master.replace_sequences(sequences);
    Ok(())
}

impl Alignment {
    /// See merge().
    pub fn merge_alignment(&mut self, patch: &Alignment, anchor_id: &str) -> Result<(), MsaError> {
        merge(self, patch, anchor_id)
    }
}
