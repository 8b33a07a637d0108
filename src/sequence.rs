// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, sync::OnceLock};

use itertools::Itertools;
use regex::Regex;

use crate::errors::MsaError;
use crate::segment::Segment;

/// Native alignment gap: the residue is absent from this sequence.
pub const GAP_CHAR: char = '-';
/// Gap added purely to pad a row that has no data in a column created by a merge.
pub const MERGE_GAP_CHAR: char = '.';

pub fn is_gap(c: char) -> bool {
    c == GAP_CHAR || c == MERGE_GAP_CHAR
}

pub(crate) fn check_gap_char(gap_char: char) -> Result<(), MsaError> {
    if is_gap(gap_char) {
        Ok(())
    } else {
        Err(MsaError::Format(format!(
            "'{}' is not a gap character (expected '{}' or '{}')",
            gap_char, GAP_CHAR, MERGE_GAP_CHAR
        )))
    }
}

/// Resolves a possibly negative offset to an index into a string of length `len`, for
/// reading: the result must address an existing character.
pub(crate) fn resolve_offset(offset: isize, len: usize) -> Result<usize, MsaError> {
    let idx = if offset < 0 {
        len as isize + offset
    } else {
        offset
    };
    if idx < 0 || idx as usize >= len {
        return Err(MsaError::OutOfRange { index: offset, len });
    }
    Ok(idx as usize)
}

/// Like resolve_offset(), but for insertion: `len` itself is valid (append).
pub(crate) fn resolve_insert_offset(offset: isize, len: usize) -> Result<usize, MsaError> {
    let idx = if offset < 0 {
        len as isize + offset
    } else {
        offset
    };
    if idx < 0 || idx as usize > len {
        return Err(MsaError::OutOfRange { index: offset, len });
    }
    Ok(idx as usize)
}

fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:(?P<id_type>[^/\s]+)\|)?(?P<id>[^|/.\s]+)(?:\.(?P<id_ver>[^|/\s]+))?(?:/(?P<segs>\S*))?$",
        )
        .expect("header regex")
    })
}

fn segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?\d+)-(-?\d+)$").expect("segment regex"))
}

/// The fields of a sequence header, `[id_type|]id[.id_ver][/seg1_seg2...] [description]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: String,
    pub id_type: Option<String>,
    pub id_ver: Option<String>,
    pub segments: Vec<Segment>,
    /// Everything after the identifier token, leading whitespace included.
    pub description: Option<String>,
}

impl Header {
    pub fn parse(hdr: &str) -> Result<Header, MsaError> {
        let hdr = hdr.trim();
        let (token, description) = match hdr.find(char::is_whitespace) {
            Some(idx) => (&hdr[..idx], Some(hdr[idx..].to_string())),
            None => (hdr, None),
        };
        let caps = header_re()
            .captures(token)
            .ok_or_else(|| MsaError::HeaderParse(format!("cannot parse header '{}'", hdr)))?;
        let segments = match caps.name("segs") {
            Some(segs) => parse_segments(segs.as_str())?,
            None => Vec::new(),
        };
        Ok(Header {
            id: caps["id"].to_string(),
            id_type: caps.name("id_type").map(|m| m.as_str().to_string()),
            id_ver: caps.name("id_ver").map(|m| m.as_str().to_string()),
            segments,
            description,
        })
    }
}

// "12-134_178-234" -> [12-134, 178-234]
fn parse_segments(segs: &str) -> Result<Vec<Segment>, MsaError> {
    segs.split('_')
        .map(|seg| {
            let caps = segment_re()
                .captures(seg)
                .ok_or_else(|| MsaError::HeaderParse(format!("malformed segment '{}'", seg)))?;
            let start: i64 = caps[1]
                .parse()
                .map_err(|_| MsaError::HeaderParse(format!("bad start in segment '{}'", seg)))?;
            let stop: i64 = caps[2]
                .parse()
                .map_err(|_| MsaError::HeaderParse(format!("bad stop in segment '{}'", seg)))?;
            Segment::new(start, stop)
        })
        .collect()
}

/// One row of an alignment: an identified, gapped residue string. Residues are ASCII, so
/// offsets are byte indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    id: String,
    id_type: Option<String>,
    id_ver: Option<String>,
    segments: Vec<Segment>,
    description: Option<String>,
    residues: String,
}

impl Sequence {
    pub fn new(header: &str, residues: &str) -> Result<Self, MsaError> {
        let hdr = Header::parse(header)?;
        Sequence::from_header(hdr, residues)
    }

    pub fn from_header(hdr: Header, residues: &str) -> Result<Self, MsaError> {
        if !residues.is_ascii() {
            return Err(MsaError::Format(format!(
                "non-ASCII residues in sequence '{}'",
                hdr.id
            )));
        }
        Ok(Sequence {
            id: hdr.id,
            id_type: hdr.id_type,
            id_ver: hdr.id_ver,
            segments: hdr.segments,
            description: hdr.description,
            residues: residues.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `id[.id_ver]`: the key of this sequence within an alignment.
    pub fn accession(&self) -> String {
        match &self.id_ver {
            Some(ver) => format!("{}.{}", self.id, ver),
            None => self.id.clone(),
        }
    }

    pub fn has_accession(&self, accession: &str) -> bool {
        match &self.id_ver {
            Some(ver) => accession
                .strip_prefix(self.id.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
                == Some(ver.as_str()),
            None => accession == self.id,
        }
    }

    pub fn id_type(&self) -> Option<&str> {
        self.id_type.as_deref()
    }

    pub fn id_ver(&self) -> Option<&str> {
        self.id_ver.as_deref()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim_start)
    }

    pub fn residues(&self) -> &str {
        &self.residues
    }

    /// Renders the header back, e.g. `domain|1cukA01/12-134_178-234`.
    pub fn header(&self) -> String {
        let mut hdr = String::new();
        if let Some(id_type) = &self.id_type {
            hdr.push_str(id_type);
            hdr.push('|');
        }
        hdr.push_str(&self.id);
        if let Some(id_ver) = &self.id_ver {
            hdr.push('.');
            hdr.push_str(id_ver);
        }
        if !self.segments.is_empty() {
            hdr.push('/');
            hdr.push_str(&self.segments.iter().join("_"));
        }
        if let Some(desc) = &self.description {
            hdr.push_str(desc);
        }
        hdr
    }

    /// Length of the gapped string.
    pub fn length(&self) -> usize {
        self.residues.len()
    }

    /// Number of non-gap characters.
    pub fn residue_count(&self) -> usize {
        self.residues.chars().filter(|&c| !is_gap(c)).count()
    }

    pub fn ungapped(&self) -> String {
        self.residues.chars().filter(|&c| !is_gap(c)).collect()
    }

    pub fn is_gap_at_offset(&self, offset: isize) -> Result<bool, MsaError> {
        Ok(is_gap(self.residue_at_offset(offset)?))
    }

    pub fn residue_at_offset(&self, offset: isize) -> Result<char, MsaError> {
        let idx = resolve_offset(offset, self.length())?;
        Ok(self.residues.as_bytes()[idx] as char)
    }

    pub fn residue_at_position(&self, position: usize) -> Result<char, MsaError> {
        let offset = self.offset_at_position(position)?;
        Ok(self.residues.as_bytes()[offset] as char)
    }

    /// 1-based sequence position of the residue at `offset`, or None if that offset holds a
    /// gap.
    pub fn position_at_offset(&self, offset: isize) -> Result<Option<usize>, MsaError> {
        let idx = resolve_offset(offset, self.length())?;
        let bytes = self.residues.as_bytes();
        if is_gap(bytes[idx] as char) {
            return Ok(None);
        }
        let pos = bytes[..=idx]
            .iter()
            .filter(|&&b| !is_gap(b as char))
            .count();
        Ok(Some(pos))
    }

    /// Offset of the `position`-th (1-based) non-gap character.
    pub fn offset_at_position(&self, position: usize) -> Result<usize, MsaError> {
        let out_of_range = MsaError::OutOfRange {
            index: position as isize,
            len: self.residue_count(),
        };
        if position == 0 {
            return Err(out_of_range);
        }
        self.residues
            .char_indices()
            .filter(|(_, c)| !is_gap(*c))
            .nth(position - 1)
            .map(|(offset, _)| offset)
            .ok_or(out_of_range)
    }

    /// Native residue number of the residue at `position`, according to the segments. None if
    /// the sequence has no segments or the segments do not cover that many residues.
    pub fn residue_number_at_position(&self, position: usize) -> Result<Option<i64>, MsaError> {
        if position == 0 || position > self.residue_count() {
            return Err(MsaError::OutOfRange {
                index: position as isize,
                len: self.residue_count(),
            });
        }
        let mut remaining = position;
        for seg in &self.segments {
            if remaining <= seg.residue_count() {
                let number = seg.start().checked_add_unsigned(remaining as u64 - 1);
                return Ok(number);
            }
            remaining -= seg.residue_count();
        }
        Ok(None)
    }

    /// Checks that the segments account for exactly the non-gap residues.
    pub fn check_segments(&self) -> Result<(), MsaError> {
        if self.segments.is_empty() {
            return Ok(());
        }
        let numbered = self
            .segments
            .iter()
            .fold(0usize, |acc, seg| acc.saturating_add(seg.residue_count()));
        let count = self.residue_count();
        if numbered != count {
            return Err(MsaError::Format(format!(
                "segments of '{}' number {} residues, sequence has {}",
                self.id, numbered, count
            )));
        }
        Ok(())
    }

    /// Inserts a gap before `offset`; negative offsets count from the end, and `offset ==
    /// length` appends.
    pub fn insert_gap_at_offset(&mut self, offset: isize, gap_char: char) -> Result<(), MsaError> {
        check_gap_char(gap_char)?;
        let idx = resolve_insert_offset(offset, self.length())?;
        self.insert_gap_at(idx, gap_char);
        Ok(())
    }

    // Caller has resolved and checked idx.
    pub(crate) fn insert_gap_at(&mut self, idx: usize, gap_char: char) {
        self.residues.insert(idx, gap_char);
    }

    /// Marks the residue at `offset` as a structural insertion. Gaps are left alone.
    pub fn lower_case_at_offset(&mut self, offset: isize) -> Result<(), MsaError> {
        let idx = resolve_offset(offset, self.length())?;
        if let Some(res) = self.residues.get_mut(idx..=idx) {
            res.make_ascii_lowercase();
        }
        Ok(())
    }

    /// Same identity, new residue string (used when rebuilding rows column-wise).
    pub(crate) fn with_residues(&self, residues: String) -> Sequence {
        Sequence {
            id: self.id.clone(),
            id_type: self.id_type.clone(),
            id_ver: self.id_ver.clone(),
            segments: self.segments.clone(),
            description: self.description.clone(),
            residues,
        }
    }

    /// FastA-style two-line record.
    pub fn to_text(&self) -> String {
        format!(">{}\n{}\n", self.header(), self.residues)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
