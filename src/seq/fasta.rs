// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::errors::MsaError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, MsaError> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

pub fn parse_fasta_str(contents: &str) -> Result<SeqFile, MsaError> {
    parse_fasta(contents.as_bytes())
}

pub fn parse_fasta<R: BufRead>(reader: R) -> Result<SeqFile, MsaError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let l = line?;
        let l = l.trim_end();
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            current_record = Some(SeqRecord {
                header: String::from(hdr.trim()),
                sequence: String::new(),
            });
        } else if l.is_empty() {
            continue;
        } else {
            // append line to current record's sequence
            match current_record.as_mut() {
                Some(record) => record.sequence.push_str(l.trim_start()),
                None => {
                    return Err(MsaError::Format(format!(
                        "line {}: sequence data before first FastA header",
                        lineno + 1
                    )))
                }
            }
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    Ok(result)
}

/// Writes records as FastA; `line_width` 0 means one line per sequence.
pub fn write_fasta<W: Write>(
    out: &mut W,
    records: &[SeqRecord],
    line_width: usize,
) -> Result<(), MsaError> {
    for record in records {
        writeln!(out, ">{}", record.header)?;
        if line_width == 0 || record.sequence.is_empty() {
            writeln!(out, "{}", record.sequence)?;
        } else {
            // Sequences are ASCII, so byte chunks are char chunks.
            for chunk in record.sequence.as_bytes().chunks(line_width) {
                out.write_all(chunk)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fasta_str() {
        let fasta = parse_fasta_str(">seq1\nTTGCCG-CGA\n>seq2\nTTCCC\nGGCGA\n\n>seq3 with a description\nTTACCG-CAA\n")
            .expect("valid FastA");
        assert_eq!(fasta.len(), 3);
        assert_eq!(fasta[0].header, "seq1");
        assert_eq!(fasta[0].sequence, "TTGCCG-CGA");
        assert_eq!(fasta[1].sequence, "TTCCCGGCGA");
        assert_eq!(fasta[2].header, "seq3 with a description");
        assert_eq!(fasta[2].sequence, "TTACCG-CAA");
    }

    #[test]
    fn test_parse_fasta_empty() {
        assert!(parse_fasta_str("").expect("empty is fine").is_empty());
    }

    #[test]
    fn test_parse_fasta_headerless() {
        assert!(matches!(
            parse_fasta_str("ACGT\n>s\nAC\n"),
            Err(MsaError::Format(_))
        ));
    }

    #[test]
    fn test_parse_fasta_crlf() {
        let fasta = parse_fasta_str(">s1\r\nAC-G\r\n").expect("valid FastA");
        assert_eq!(fasta[0].header, "s1");
        assert_eq!(fasta[0].sequence, "AC-G");
    }

    #[test]
    fn test_write_fasta() {
        let records = vec![
            SeqRecord {
                header: String::from("s1"),
                sequence: String::from("ACGTACG"),
            },
            SeqRecord {
                header: String::from("s2"),
                sequence: String::from("AC-TA.G"),
            },
        ];
        let mut out: Vec<u8> = Vec::new();
        write_fasta(&mut out, &records, 0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">s1\nACGTACG\n>s2\nAC-TA.G\n"
        );

        let mut wrapped: Vec<u8> = Vec::new();
        write_fasta(&mut wrapped, &records, 3).unwrap();
        assert_eq!(
            String::from_utf8(wrapped).unwrap(),
            ">s1\nACG\nTAC\nG\n>s2\nAC-\nTA.\nG\n"
        );
    }

    #[test]
    fn test_write_then_parse() {
        let records = parse_fasta_str(">a/1-4\nAC-GT\n>b\n--CGT\n").unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_fasta(&mut out, &records, 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(parse_fasta_str(&text).unwrap(), records);
    }
}
