// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{stdout, Write},
    path::PathBuf,
};

use clap::Parser;
use log::{debug, info};

use crate::collection::{load_collection, Collection};
use crate::config::AlnstatConfig;
use crate::errors::AlnstatError;
use crate::export::{write_csv, write_stats_json};
use crate::report::{write_preview, write_statistics, write_summary};
use crate::sequence::strip_gaps;
use crate::stats::{sequence_by_secondary_id, Statistics};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Aligned FastA file (UniRef-style headers)
    fasta_file: PathBuf,

    /// CSV output file (default: from config, else data/processed/sequences_parsed.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the statistics as JSON to this file
    #[arg(short, long = "stats-json")]
    stats_json: Option<PathBuf>,

    /// Number of sequences to show in the preview table
    #[arg(short = 'n', long = "preview")]
    preview: Option<usize>,

    /// Print the sequence whose UniRef ID is this
    #[arg(short, long, value_name = "UNIREF_ID")]
    lookup: Option<String>,

    /// Strip gaps from the looked-up sequence
    #[arg(short, long, requires = "lookup")]
    ungapped: bool,

    /// No report on stdout (output files are still written)
    #[arg(short, long)]
    quiet: bool,
}

// Command-line values win over the config file.
fn merge(cli: &Cli, config: AlnstatConfig) -> AlnstatConfig {
    AlnstatConfig {
        output: cli.output.clone().unwrap_or(config.output),
        preview_rows: cli.preview.unwrap_or(config.preview_rows),
        stats_json: cli.stats_json.clone().or(config.stats_json),
    }
}

fn report<W: Write>(
    out: &mut W,
    records: &Collection,
    stats: &Statistics,
    config: &AlnstatConfig,
) -> Result<(), AlnstatError> {
    write_summary(out, stats)?;
    writeln!(out)?;
    writeln!(out, "Saved to {}", config.output.display())?;
    writeln!(out)?;
    write_statistics(out, stats)?;
    if config.preview_rows > 0 {
        writeln!(out)?;
        write_preview(out, records, config.preview_rows)?;
    }
    Ok(())
}

pub fn run() -> Result<(), AlnstatError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = merge(&cli, AlnstatConfig::load()?);
    debug!("effective config: {:?}", config);

    let records = load_collection(&cli.fasta_file)?;
    write_csv(&records, &config.output)?;

    let stats = Statistics::compute(&records)?;
    if let Some(path) = &config.stats_json {
        write_stats_json(&stats, path)?;
    }

    let mut out = stdout().lock();
    if !cli.quiet {
        report(&mut out, &records, &stats, &config)?;
    }

    if let Some(id) = &cli.lookup {
        let sequence = sequence_by_secondary_id(&records, id)?;
        if cli.ungapped {
            writeln!(out, "{}", strip_gaps(sequence))?;
        } else {
            writeln!(out, "{}", sequence)?;
        }
    }

    Ok(())
}
