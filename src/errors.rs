// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{error, fmt, io};

#[derive(Debug)]
pub enum MsaError {
    Io(io::Error),
    Format(String),
    HeaderParse(String),
    InvalidRange { start: i64, stop: i64 },
    OutOfRange { index: isize, len: usize },
    ColumnMismatch { id: String, expected: usize, found: usize },
    AnchorMismatch(String),
    DuplicateId(String),
}

// These allow conversion to MsaError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for MsaError {
    fn from(e: io::Error) -> Self {
        MsaError::Io(e)
    }
}

impl From<String> for MsaError {
    fn from(s: String) -> Self {
        MsaError::Format(s)
    }
}

impl From<serde_json::Error> for MsaError {
    fn from(e: serde_json::Error) -> Self {
        MsaError::Format(format!("JSON: {}", e))
    }
}

impl fmt::Display for MsaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MsaError::Io(e) => write!(f, "I/O error: {}", e),
            MsaError::Format(msg) => write!(f, "Format error: {}", msg),
            MsaError::HeaderParse(msg) => write!(f, "Header parse error: {}", msg),
            MsaError::InvalidRange { start, stop } => {
                write!(f, "Invalid range: start {} > stop {}", start, stop)
            }
            MsaError::OutOfRange { index, len } => {
                write!(f, "Index {} out of range (len = {})", index, len)
            }
            MsaError::ColumnMismatch { id, expected, found } => write!(
                f,
                "Sequence '{}' has {} columns, alignment has {}",
                id, found, expected
            ),
            MsaError::AnchorMismatch(msg) => write!(f, "Anchor mismatch: {}", msg),
            MsaError::DuplicateId(id) => write!(f, "Duplicate sequence id: '{}'", id),
        }
    }
}

impl error::Error for MsaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MsaError::Io(e) => Some(e),
            _ => None,
        }
    }
}
