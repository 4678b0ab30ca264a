// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{NamedTempFile, TempDir};

pub const SCENARIO: &str = "\
>UniRef100_UPI0000000AAA desc one
MK-KV
GT
>UniRef100_UPI0000000BBB desc two
--AA
";

pub fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

pub fn fasta_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp FastA file");
    file.write_all(content.as_bytes()).expect("write FastA");
    file
}

/// Runs the binary with HOME and the working directory both set to `dir`, so that no stray
/// .alnstatconfig gets picked up.
pub fn run_alnstat(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_alnstat"))
        .args(args)
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("running alnstat")
}
