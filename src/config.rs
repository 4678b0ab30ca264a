// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::errors::{AlnstatError, AlnstatResult};

pub const CONFIG_FILENAME: &str = ".alnstatconfig";

/// Settings read from `.alnstatconfig` (JSON). Anything left out takes its default; command-line
/// options override whatever is here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlnstatConfig {
    pub output: PathBuf,
    pub preview_rows: usize,
    pub stats_json: Option<PathBuf>,
}

impl Default for AlnstatConfig {
    fn default() -> Self {
        AlnstatConfig {
            output: PathBuf::from("data/processed/sequences_parsed.csv"),
            preview_rows: 3,
            stats_json: None,
        }
    }
}

impl AlnstatConfig {
    pub fn from_file(path: &Path) -> AlnstatResult<Self> {
        let config_err = |message: String| AlnstatError::Config {
            path: path.to_path_buf(),
            message,
        };
        let text = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| config_err(e.to_string()))
    }

    /// Config from the first `.alnstatconfig` found (home directory, then current directory), or
    /// the defaults if there is none.
    pub fn load() -> AlnstatResult<Self> {
        match find_config() {
            Some(path) => {
                info!("Reading config from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

fn find_config() -> Option<PathBuf> {
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
