// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Console report. Everything writes to a caller-supplied sink so that it can be checked in tests;
// the runner passes stdout.

use std::io::{self, Write};

use crate::sequence::SequenceRecord;
use crate::stats::Statistics;

pub fn write_summary<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "Parsed {} sequences", stats.total_sequences)?;
    writeln!(out, "   Average length: {:.0} aa", stats.avg_length)?;
    writeln!(out, "   Average gaps: {:.1}%", stats.avg_gap_percentage)
}

pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "Statistics:")?;
    for (name, value) in stats.fields() {
        writeln!(out, "   {}: {}", name, value)?;
    }
    Ok(())
}

/// Table of the first `n` records: UniRef ID, length and gap percentage.
pub fn write_preview<W: Write>(
    out: &mut W,
    records: &[SequenceRecord],
    n: usize,
) -> io::Result<()> {
    let shown = &records[..n.min(records.len())];
    if shown.is_empty() {
        return Ok(());
    }
    let id_width = shown
        .iter()
        .map(|r| r.secondary_id.chars().count())
        .chain(std::iter::once("uniref_id".len()))
        .max()
        .unwrap_or_default();

    writeln!(out, "First {} sequences:", shown.len())?;
    writeln!(
        out,
        "{:<id_width$}  {:>6}  {:>14}",
        "uniref_id", "length", "gap_percentage"
    )?;
    for rec in shown {
        writeln!(
            out,
            "{:<id_width$}  {:>6}  {:>14.2}",
            rec.secondary_id, rec.length, rec.gap_percentage
        )?;
    }
    Ok(())
}
