// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{collections::HashSet, fmt, path::Path};

use log::debug;

use crate::errors::MsaError;
use crate::seq::fasta::{parse_fasta_str, read_fasta_file};
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;
use crate::seq::stockholm::read_stockholm_file;
use crate::sequence::{check_gap_char, is_gap, resolve_insert_offset, Sequence};

/// An ordered set of sequences sharing one column space. All rows have the same length, and
/// rows are keyed by accession (`id[.id_ver]`), which is unique. Cloning gives a fully
/// independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    sequences: Vec<Sequence>,
}

impl Alignment {
    pub fn new() -> Self {
        Alignment {
            sequences: Vec::new(),
        }
    }

    pub fn from_sequences(sequences: Vec<Sequence>) -> Result<Self, MsaError> {
        let mut aln = Alignment::new();
        for seq in sequences {
            aln.append_sequence(seq)?;
        }
        Ok(aln)
    }

    pub fn from_records(seq_file: SeqFile) -> Result<Self, MsaError> {
        let sequences = seq_file
            .iter()
            .map(|rec| Sequence::new(&rec.header, &rec.sequence))
            .collect::<Result<Vec<_>, _>>()?;
        Alignment::from_sequences(sequences)
    }

    pub fn from_vecs(headers: Vec<String>, sequences: Vec<String>) -> Result<Self, MsaError> {
        if headers.len() != sequences.len() {
            return Err(MsaError::Format(format!(
                "{} headers but {} sequences",
                headers.len(),
                sequences.len()
            )));
        }
        let seq_file: SeqFile = headers
            .into_iter()
            .zip(sequences)
            .map(|(header, sequence)| SeqRecord { header, sequence })
            .collect();
        Alignment::from_records(seq_file)
    }

    pub fn from_fasta_str(contents: &str) -> Result<Self, MsaError> {
        Alignment::from_records(parse_fasta_str(contents)?)
    }

    pub fn from_fasta_file<P: AsRef<Path>>(path: P) -> Result<Self, MsaError> {
        Alignment::from_records(read_fasta_file(path)?)
    }

    pub fn from_stockholm_file<P: AsRef<Path>>(path: P) -> Result<Self, MsaError> {
        Alignment::from_records(read_stockholm_file(path)?)
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Row accessions, in row order.
    pub fn seq_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.sequences.iter().map(Sequence::accession)
    }

    pub fn find_seq_by_id(&self, accession: &str) -> Option<&Sequence> {
        self.sequences.iter().find(|seq| seq.has_accession(accession))
    }

    pub fn count_sequences(&self) -> usize {
        self.sequences.len()
    }

    /// Number of columns (0 for an empty alignment).
    pub fn aln_len(&self) -> usize {
        self.sequences.first().map_or(0, Sequence::length)
    }

    /// Adds a row at the end. The first row of an empty alignment sets the column count.
    pub fn append_sequence(&mut self, seq: Sequence) -> Result<(), MsaError> {
        if !self.sequences.is_empty() && seq.length() != self.aln_len() {
            return Err(MsaError::ColumnMismatch {
                id: seq.id().to_string(),
                expected: self.aln_len(),
                found: seq.length(),
            });
        }
        let accession = seq.accession();
        if self.find_seq_by_id(&accession).is_some() {
            return Err(MsaError::DuplicateId(accession));
        }
        self.sequences.push(seq);
        Ok(())
    }

    /// Inserts the same gap column in every row. A negative offset is resolved once, against
    /// the current column count.
    pub fn insert_gap_at_offset(&mut self, offset: isize, gap_char: char) -> Result<(), MsaError> {
        check_gap_char(gap_char)?;
        let idx = resolve_insert_offset(offset, self.aln_len())?;
        for seq in self.sequences.iter_mut() {
            seq.insert_gap_at(idx, gap_char);
        }
        Ok(())
    }

    /// Returns a copy without the columns in which every row has a gap.
    pub fn remove_alignment_gaps(&self) -> Alignment {
        let keep: Vec<bool> = (0..self.aln_len())
            .map(|col| {
                self.sequences
                    .iter()
                    .any(|seq| !is_gap(seq.residues().as_bytes()[col] as char))
            })
            .collect();
        debug!(
            "removing {} all-gap columns out of {}",
            keep.iter().filter(|&&k| !k).count(),
            keep.len()
        );
        let sequences = self
            .sequences
            .iter()
            .map(|seq| {
                let residues: String = seq
                    .residues()
                    .chars()
                    .zip(keep.iter())
                    .filter_map(|(c, &k)| k.then_some(c))
                    .collect();
                seq.with_residues(residues)
            })
            .collect();
        Alignment { sequences }
    }

    /// Checks that the accessions in `ids` are new to this alignment and distinct.
    pub(crate) fn check_new_ids<I>(&self, ids: I) -> Result<(), MsaError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen: HashSet<String> = self.seq_ids().collect();
        for id in ids {
            if seen.contains(&id) {
                return Err(MsaError::DuplicateId(id));
            }
            seen.insert(id);
        }
        Ok(())
    }

    // Callers guarantee equal lengths and unique ids.
    pub(crate) fn replace_sequences(&mut self, sequences: Vec<Sequence>) {
        self.sequences = sequences;
    }

    pub fn to_records(&self) -> SeqFile {
        self.sequences
            .iter()
            .map(|seq| SeqRecord {
                header: seq.header(),
                sequence: seq.residues().to_string(),
            })
            .collect()
    }

    pub fn to_fasta(&self) -> String {
        self.sequences.iter().map(Sequence::to_text).collect()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fasta())
    }
}
