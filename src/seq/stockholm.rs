// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::MsaError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_stockholm_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, MsaError> {
    let file = File::open(path)?;
    parse_stockholm(BufReader::new(file))
}

pub fn parse_stockholm_str(contents: &str) -> Result<SeqFile, MsaError> {
    parse_stockholm(contents.as_bytes())
}

// Interleaved files repeat the sequence names in each block; fragments are concatenated per
// name, and names keep the order in which they were first seen.
pub fn parse_stockholm<R: BufRead>(reader: R) -> Result<SeqFile, MsaError> {
    let mut order: Vec<String> = Vec::new();
    let mut sequences: HashMap<String, String> = HashMap::new();

    for (lineno, line) in reader.lines().enumerate() {
        let l = line?;
        let trimmed = l.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            // Annotation -> ignore.
            continue;
        }
        if trimmed.starts_with("//") {
            break;
        }
        let mut fields = trimmed.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(seqname), Some(aln_seq), None) => {
                let entry = sequences.entry(seqname.to_string()).or_insert_with(|| {
                    order.push(seqname.to_string());
                    String::new()
                });
                entry.push_str(aln_seq);
            }
            _ => {
                return Err(MsaError::Format(format!(
                    "line {}: expected exactly two fields",
                    lineno + 1
                )))
            }
        }
    }
    debug!("read {} Stockholm records", order.len());

    let mut result: SeqFile = Vec::new();
    for name in order {
        let sequence = sequences.remove(&name).unwrap_or_default();
        result.push(SeqRecord {
            header: name,
            sequence,
        });
    }
    Ok(result)
}
