// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::errors::{AlnstatError, AlnstatResult};
use crate::sequence::SequenceRecord;

/// Summary of a set of records. Recomputed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_sequences: usize,
    pub avg_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub avg_gap_percentage: f64,
    pub sequences_with_gaps: usize,
}

impl Statistics {
    pub fn compute(records: &[SequenceRecord]) -> AlnstatResult<Statistics> {
        let (min_length, max_length) = match records.iter().map(|r| r.length).minmax() {
            MinMaxResult::NoElements => return Err(AlnstatError::EmptyCollection),
            MinMaxResult::OneElement(l) => (l, l),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let n = records.len() as f64;
        let total_length: usize = records.iter().map(|r| r.length).sum();
        // Mean of the (already rounded) per-record percentages.
        let total_gap_pct: f64 = records.iter().map(|r| r.gap_percentage).sum();

        Ok(Statistics {
            total_sequences: records.len(),
            avg_length: total_length as f64 / n,
            min_length,
            max_length,
            avg_gap_percentage: total_gap_pct / n,
            sequences_with_gaps: records.iter().filter(|r| r.has_gaps()).count(),
        })
    }

    // (name, value) pairs, in export order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("total_sequences", self.total_sequences.to_string()),
            ("avg_length", self.avg_length.to_string()),
            ("min_length", self.min_length.to_string()),
            ("max_length", self.max_length.to_string()),
            ("avg_gap_percentage", self.avg_gap_percentage.to_string()),
            ("sequences_with_gaps", self.sequences_with_gaps.to_string()),
        ]
    }
}

/// First record (in file order) whose UniRef ID is `id`.
pub fn find_by_secondary_id<'a>(
    records: &'a [SequenceRecord],
    id: &str,
) -> AlnstatResult<&'a SequenceRecord> {
    records
        .iter()
        .find(|r| r.secondary_id == id)
        .ok_or_else(|| AlnstatError::NotFound { id: id.to_string() })
}

pub fn sequence_by_secondary_id<'a>(
    records: &'a [SequenceRecord],
    id: &str,
) -> AlnstatResult<&'a str> {
    find_by_secondary_id(records, id).map(|r| r.sequence.as_str())
}
