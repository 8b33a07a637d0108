// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records.
//

pub type SeqFile = Vec<SeqRecord>;

/// True IFF all records have the same length, i.e. the file can be an alignment.
pub fn is_aligned(seq_file: &SeqFile) -> bool {
    let mut iter = seq_file.iter();
    let Some(first) = iter.next() else {
        return true;
    };
    let first_len = first.sequence.len();
    iter.all(|rec| rec.sequence.len() == first_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(header: &str, sequence: &str) -> SeqRecord {
        SeqRecord {
            header: String::from(header),
            sequence: String::from(sequence),
        }
    }

    #[test]
    fn test_is_aligned() {
        assert!(is_aligned(&Vec::new()));
        assert!(is_aligned(&vec![rec("a", "AC-"), rec("b", "-CG")]));
        assert!(!is_aligned(&vec![rec("a", "AC-"), rec("b", "CG")]));
    }
}
