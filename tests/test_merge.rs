// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use msamerge::{errors::MsaError, merge, Alignment, ColumnSlot};

#[test]
fn merge_counts_accumulate() {
    let mut aln_ref = utils::read_fixture("ref.fa");
    assert_eq!(aln_ref.count_sequences(), 2);
    let aln_merge1 = utils::read_fixture("merge1.fa");
    assert_eq!(aln_merge1.count_sequences(), 3);
    let aln_merge2 = utils::read_fixture("merge2.fa");
    assert_eq!(aln_merge2.count_sequences(), 3);

    aln_ref.merge_alignment(&aln_merge1, "ref1").unwrap();
    assert_eq!(aln_ref.count_sequences(), 4);
    assert!(utils::all_rows_same_length(&aln_ref));

    aln_ref.merge_alignment(&aln_merge2, "ref2").unwrap();
    assert_eq!(aln_ref.count_sequences(), 6);
    assert!(utils::all_rows_same_length(&aln_ref));
}

#[test]
fn first_merge_on_ref1() {
    let mut aln = utils::read_fixture("ref.fa");
    aln.merge_alignment(&utils::read_fixture("merge1.fa"), "ref1")
        .unwrap();
    insta::assert_snapshot!(aln.to_fasta(), @r"
    >ref1
    ---.AK.GHP--GP..KAPG..PAK--
    >ref2
    CGC.AK.GH-PKA-..-APG..P--GT
    >src1.1
    ...gAGgG-P..GPgkKAPGg--AK..
    >src1.2
    ...pAGgCCP..GP--KAPGgsAA-..
    ");
}

#[test]
fn second_merge_on_ref2() {
    let mut aln = utils::read_fixture("ref.fa");
    aln.merge_alignment(&utils::read_fixture("merge1.fa"), "ref1")
        .unwrap();
    aln.merge_alignment(&utils::read_fixture("merge2.fa"), "ref2")
        .unwrap();
    insta::assert_snapshot!(aln.to_fasta(), @r"
    >ref1
    ..---...AK.GHP--.GP..KAPG..PAK--.
    >ref2
    ..CGC...AK.GH-PK.A-..-APG..P--GT.
    >src1.1
    .....g..AGgG-P...GPgkKAPGg--AK...
    >src1.2
    .....p..AGgCCP...GP--KAPGgsAA-...
    >src2.1
    --CGC.-pAK.HP.PKgA....A-G..P..GPa
    >src2.2
    ghCHC.fsAK.HP.PK-A....AHG..P..GPa
    ");
}

#[test]
fn merge_keeps_anchor_residues_and_order() {
    let mut aln = utils::read_fixture("ref.fa");
    let before = aln.clone();
    aln.merge_alignment(&utils::read_fixture("merge1.fa"), "ref1")
        .unwrap();
    // Master rows keep their residues, in order; only gaps were added.
    for (old, new) in before.sequences().iter().zip(aln.sequences()) {
        assert_eq!(old.accession(), new.accession());
        assert_eq!(old.ungapped(), new.ungapped());
    }
    let ids: Vec<String> = aln.seq_ids().collect();
    assert_eq!(ids, vec!["ref1", "ref2", "src1.1", "src1.2"]);
}

#[test]
fn merge_grows_column_space() {
    let mut aln = utils::read_fixture("ref.fa");
    let patch = utils::read_fixture("merge1.fa");
    let before = aln.aln_len();
    aln.merge_alignment(&patch, "ref1").unwrap();
    assert!(aln.aln_len() >= before.max(patch.aln_len()));
    let after_first = aln.aln_len();
    aln.merge_alignment(&utils::read_fixture("merge2.fa"), "ref2")
        .unwrap();
    assert!(aln.aln_len() >= after_first);
}

#[test]
fn merge_with_free_function() {
    let mut aln = utils::read_fixture("ref.fa");
    let patch = utils::read_fixture("merge1.fa");
    merge(&mut aln, &patch, "ref1").unwrap();
    assert_eq!(aln.aln_len(), 27);
}

#[test]
fn merge_plan_of_fixture_anchors() {
    let master = utils::read_fixture("ref.fa");
    let patch = utils::read_fixture("merge1.fa");
    let plan = msamerge::plan_merge(
        master.find_seq_by_id("ref1").unwrap(),
        patch.find_seq_by_id("ref1").unwrap(),
    )
    .unwrap();
    // 14 residues in common; 7 gap columns in the master anchor, 6 in the patch anchor.
    assert_eq!(plan.origin_counts(), (14, 7, 6));
    assert_eq!(plan.len(), 27);
    assert_eq!(plan.slots()[0], ColumnSlot::MasterOnly { master: 0 });
    assert_eq!(plan.slots()[3], ColumnSlot::PatchOnly { patch: 0 });
    assert_eq!(plan.slots()[4], ColumnSlot::Common { master: 3, patch: 1 });
}

#[test]
fn merge_unknown_anchor_fails() {
    let mut aln = utils::read_fixture("ref.fa");
    let before = aln.clone();
    let patch = utils::read_fixture("merge1.fa");
    assert!(matches!(
        aln.merge_alignment(&patch, "ref2"),
        Err(MsaError::AnchorMismatch(_))
    ));
    assert_eq!(aln, before);
}

#[test]
fn merge_mismatched_anchor_fails() {
    let mut aln = utils::read_fixture("ref.fa");
    let before = aln.clone();
    // Same id, different residues (ref2's residues under ref1's name).
    let patch = Alignment::from_fasta_str(">ref1\nCGCAKGHPKAAPGPGT\n>x\nCGCAKGHPKAAPGPGT\n").unwrap();
    assert!(matches!(
        aln.merge_alignment(&patch, "ref1"),
        Err(MsaError::AnchorMismatch(_))
    ));
    assert_eq!(aln, before);
}

#[test]
fn merge_same_patch_twice_fails() {
    let mut aln = utils::read_fixture("ref.fa");
    let patch = utils::read_fixture("merge1.fa");
    aln.merge_alignment(&patch, "ref1").unwrap();
    let merged = aln.clone();
    assert!(matches!(
        aln.merge_alignment(&patch, "ref1"),
        Err(MsaError::DuplicateId(_))
    ));
    assert_eq!(aln, merged);
}

#[test]
fn merge_then_remove_gaps() {
    let mut aln = utils::read_fixture("ref.fa");
    aln.merge_alignment(&utils::read_fixture("merge1.fa"), "ref1")
        .unwrap();
    aln.merge_alignment(&utils::read_fixture("merge2.fa"), "ref2")
        .unwrap();
    let compact = aln.remove_alignment_gaps();
    assert_eq!(compact.count_sequences(), 6);
    assert!(compact.aln_len() <= aln.aln_len());
    assert_eq!(compact.remove_alignment_gaps(), compact);
    for (full, small) in aln.sequences().iter().zip(compact.sequences()) {
        assert_eq!(full.ungapped(), small.ungapped());
    }
}
