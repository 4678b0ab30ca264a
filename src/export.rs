// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::info;

use crate::errors::AlnstatResult;
use crate::sequence::SequenceRecord;
use crate::stats::Statistics;

const CSV_COLUMNS: [&str; 7] = [
    "id",
    "uniref_id",
    "full_header",
    "sequence",
    "length",
    "gap_count",
    "gap_percentage",
];

fn create_with_parents(path: &Path) -> AlnstatResult<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}

/// Writes one CSV row per record, header row first. The header is written even when there are no
/// records.
pub fn write_csv_to<W: Write>(records: &[SequenceRecord], writer: W) -> AlnstatResult<()> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    w.write_record(CSV_COLUMNS)?;
    for rec in records {
        w.serialize(rec)?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_csv<P: AsRef<Path>>(records: &[SequenceRecord], path: P) -> AlnstatResult<()> {
    let path = path.as_ref();
    write_csv_to(records, create_with_parents(path)?)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn stats_to_json(stats: &Statistics) -> AlnstatResult<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

pub fn write_stats_json<P: AsRef<Path>>(stats: &Statistics, path: P) -> AlnstatResult<()> {
    let path = path.as_ref();
    let mut file = create_with_parents(path)?;
    writeln!(file, "{}", stats_to_json(stats)?)?;
    info!("Wrote statistics to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::parse_str;

    fn csv_string(records: &[SequenceRecord]) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_csv_to(records, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_header_only() {
        assert_eq!(
            csv_string(&[]),
            "id,uniref_id,full_header,sequence,length,gap_count,gap_percentage\n"
        );
    }

    #[test]
    fn test_csv_rows() {
        let coll = parse_str(">UniRef100_UPI0000000AAA desc one\nMK-KV\nGT\n>s2\n").unwrap();
        let out = csv_string(&coll);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "UniRef100_UPI0000000AAA,UPI0000000AAA,UniRef100_UPI0000000AAA desc one,MK-KVGT,7,1,14.29"
        );
        assert_eq!(lines[2], "s2,s2,s2,,0,0,0.0");
    }

    #[test]
    fn test_csv_quotes_commas() {
        let coll = parse_str(">tr|X|Y cluster member, see notes\nAC\n").unwrap();
        let out = csv_string(&coll);
        assert!(out.contains("\"tr|X|Y cluster member, see notes\""));
    }

    #[test]
    fn test_write_csv_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed").join("seqs.csv");
        let coll = parse_str(">a\nA-\n").unwrap();
        write_csv(&coll, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("a,a,a,A-,2,1,50.0\n"));
    }

    #[test]
    fn test_stats_json() {
        let coll = parse_str(">a\nA-\n>b\nAAAA\n").unwrap();
        let stats = Statistics::compute(&coll).unwrap();
        let value: serde_json::Value = serde_json::from_str(&stats_to_json(&stats).unwrap()).unwrap();
        assert_eq!(value["total_sequences"], 2);
        assert_eq!(value["min_length"], 2);
        assert_eq!(value["max_length"], 4);
        assert_eq!(value["avg_length"], 3.0);
        assert_eq!(value["avg_gap_percentage"], 25.0);
        assert_eq!(value["sequences_with_gaps"], 1);
    }
}
