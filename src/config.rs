// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::MsaError;

pub const CONFIG_FILENAME: &str = ".msamergeconfig";

/// Settings read from `.msamergeconfig` (JSON). Missing or mistyped keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// FastA output line width; 0 = don't wrap.
    pub line_width: usize,
    /// Drop all-gap columns after merging.
    pub remove_gaps: bool,
}

impl Config {
    pub fn from_value(value: &Value) -> Self {
        let mut config = Config::default();
        if let Some(width) = value.get("line_width").and_then(Value::as_u64) {
            config.line_width = width as usize;
        }
        if let Some(remove) = value.get("remove_gaps").and_then(Value::as_bool) {
            config.remove_gaps = remove;
        }
        config
    }

    pub fn from_file(path: &Path) -> Result<Self, MsaError> {
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        if !value.is_object() {
            return Err(MsaError::Format(format!(
                "{}: expected a JSON object",
                path.display()
            )));
        }
        Ok(Config::from_value(&value))
    }
}

pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
