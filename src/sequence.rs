// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::seq::fasta::RECORD_MARKER;
use crate::seq::record::RawRecord;

pub const GAP_CHAR: char = '-';

// UniRef<digits>_<ID>, searched anywhere in the header.
static UNIREF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"UniRef[0-9]+_([A-Z0-9]+)").expect("valid UniRef regex"));

/// A parsed and annotated alignment row. Field order (and serialized names) are those of the
/// tabular export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceRecord {
    #[serde(rename = "id")]
    pub primary_id: String,
    #[serde(rename = "uniref_id")]
    pub secondary_id: String,
    pub full_header: String,
    pub sequence: String,
    pub length: usize,
    pub gap_count: usize,
    pub gap_percentage: f64,
}

impl SequenceRecord {
    pub fn from_raw(raw: &RawRecord) -> Self {
        let primary_id = raw
            .header
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let secondary_id = extract_secondary_id(&raw.header);
        let length = raw.body.chars().count();
        let gap_count = raw.body.chars().filter(|&c| c == GAP_CHAR).count();

        debug!("{}: len {}, {} gaps", secondary_id, length, gap_count);

        SequenceRecord {
            primary_id,
            secondary_id,
            full_header: raw.header.clone(),
            sequence: raw.body.clone(),
            length,
            gap_count,
            gap_percentage: gap_percentage(gap_count, length),
        }
    }

    pub fn ungapped(&self) -> String {
        strip_gaps(&self.sequence)
    }

    pub fn has_gaps(&self) -> bool {
        self.gap_count > 0
    }
}

/// Returns the UniRef cluster ID embedded in `header` (the part after `UniRef<digits>_`), or, if
/// there is none anywhere in the header, its first word with any leading '>' removed.
pub fn extract_secondary_id(header: &str) -> String {
    if let Some(caps) = UNIREF_RE.captures(header) {
        return caps[1].to_string();
    }

    debug!("no UniRef ID in '{}', using first word", header);
    let first_word = header.split_whitespace().next().unwrap_or(header);
    let stripped = first_word.trim_start_matches(RECORD_MARKER);
    if stripped.is_empty() {
        // A header made only of markers, e.g. ">>": keep it rather than return "".
        first_word.to_string()
    } else {
        stripped.to_string()
    }
}

pub fn strip_gaps(sequence: &str) -> String {
    sequence.chars().filter(|&c| c != GAP_CHAR).collect()
}

// Percentage of gaps, to 2 decimals; 0 for an empty sequence.
pub fn gap_percentage(gap_count: usize, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    round2(gap_count as f64 / length as f64 * 100.0)
}

// Ties go to the even neighbour, e.g. 3.125 -> 3.12.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
