// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Residue names, for display only.

#[derive(Debug, PartialEq, Eq)]
pub struct AminoAcid {
    pub one: char,
    pub three: &'static str,
    pub word: &'static str,
}

const fn aa(one: char, three: &'static str, word: &'static str) -> AminoAcid {
    AminoAcid { one, three, word }
}

pub static AMINO_ACIDS: [AminoAcid; 25] = [
    aa('A', "ala", "alanine"),
    aa('C', "cys", "cysteine"),
    aa('D', "asp", "aspartic acid"),
    aa('E', "glu", "glutamic acid"),
    aa('F', "phe", "phenylalanine"),
    aa('G', "gly", "glycine"),
    aa('H', "his", "histidine"),
    aa('I', "ile", "isoleucine"),
    aa('K', "lys", "lysine"),
    aa('L', "leu", "leucine"),
    aa('M', "met", "methionine"),
    aa('N', "asn", "asparagine"),
    aa('P', "pro", "proline"),
    aa('Q', "gln", "glutamine"),
    aa('R', "arg", "arginine"),
    aa('S', "ser", "serine"),
    aa('T', "thr", "threonine"),
    aa('V', "val", "valine"),
    aa('W', "trp", "tryptophan"),
    aa('Y', "tyr", "tyrosine"),
    aa('B', "asx", "asparagine or aspartic acid"),
    aa('Z', "glx", "glutamine or glutamic acid"),
    aa('X', "xaa", "unknown"),
    aa('U', "sec", "selenocysteine"),
    aa('O', "pyl", "pyrrolysine"),
];

impl AminoAcid {
    /// Looks up a one-letter code, ignoring case.
    pub fn get_by_id(one: char) -> Option<&'static AminoAcid> {
        let one = one.to_ascii_uppercase();
        AMINO_ACIDS.iter().find(|aa| aa.one == one)
    }

    /// Looks up a three-letter code, ignoring case.
    pub fn get_by_three(three: &str) -> Option<&'static AminoAcid> {
        AMINO_ACIDS
            .iter()
            .find(|aa| aa.three.eq_ignore_ascii_case(three))
    }
}
