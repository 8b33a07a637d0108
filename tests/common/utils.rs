// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use msamerge::{Alignment, Sequence};

#[allow(dead_code)]
pub fn read_fixture(name: &str) -> Alignment {
    let path = format!("tests/data/{}", name);
    Alignment::from_fasta_file(&path).expect("Test file not found")
}

#[allow(dead_code)]
pub fn rows(aln: &Alignment) -> Vec<(String, String)> {
    aln.sequences()
        .iter()
        .map(|seq: &Sequence| (seq.accession(), seq.residues().to_string()))
        .collect()
}

#[allow(dead_code)]
pub fn all_rows_same_length(aln: &Alignment) -> bool {
    aln.sequences()
        .iter()
        .all(|seq| seq.length() == aln.aln_len())
}

// Per-process, so that concurrent test binaries do not clash.
#[allow(dead_code)]
pub fn scratch_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("msamerge-{}-{}", std::process::id(), name));
    path
}
