// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::BufRead;
use std::path::Path;

use log::info;

use crate::errors::AlnstatResult;
use crate::seq::fasta::{open_fasta_file, FastaReader};
use crate::sequence::SequenceRecord;

// For our purposes, an alignment is just the records in file order. Duplicate IDs are kept.
pub type Collection = Vec<SequenceRecord>;

/// Enriches every record the reader yields. The first parse error aborts the whole thing: no
/// partial collection is returned.
pub fn parse_records<R: BufRead>(reader: FastaReader<R>) -> AlnstatResult<Collection> {
    reader
        .map(|raw| raw.map(|r| SequenceRecord::from_raw(&r)))
        .collect()
}

pub fn parse_str(content: &str) -> AlnstatResult<Collection> {
    parse_records(FastaReader::new(content.as_bytes()))
}

pub fn load_collection<P: AsRef<Path>>(path: P) -> AlnstatResult<Collection> {
    let path = path.as_ref();
    info!("Parsing {}", path.display());
    // The file is closed when the reader is dropped, on success and on error alike.
    let records = parse_records(open_fasta_file(path)?)?;
    info!("Parsed {} sequences", records.len());
    Ok(records)
}
