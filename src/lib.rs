// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod collection;
pub mod config;
pub mod errors;
pub mod export;
pub mod report;
mod runner;
pub mod seq;
pub mod sequence;
pub mod stats;

use crate::errors::AlnstatError;

pub fn run() -> Result<(), AlnstatError> {
    runner::run()
}
