// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlnstatError {
    #[error("FASTA file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Parse error at line {line} (byte {offset}): {message}")]
    Parse {
        line: usize,
        offset: usize,
        message: String,
    },

    #[error("Cannot compute statistics on an empty collection")]
    EmptyCollection,

    #[error("UniRef ID not found: {id}")]
    NotFound { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error reading config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type AlnstatResult<T> = Result<T, AlnstatError>;
