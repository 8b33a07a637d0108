// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    fmt,
    fs::File,
    io::{stdout, BufWriter, Write},
    path::Path,
};

use log::{info, warn};

use clap::{Parser, ValueEnum};

use serde::Serialize;

use crate::alignment::Alignment;
use crate::config::{find_config, Config};
use crate::errors::MsaError;
use crate::seq::fasta::{read_fasta_file, write_fasta};
use crate::seq::file::is_aligned;
use crate::seq::stockholm::read_stockholm_file;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Master alignment file
    aln_fname: String,

    /// Sequence file format (applies to all input files)
    #[arg(short, long = "format", default_value_t = SeqFileFormat::FastA,
        help = "Sequence file format [fasta|stockholm] (or just f|s); default: fasta",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    format: SeqFileFormat,

    /// Merge an alignment into the master, anchored on a shared sequence (FILE:ANCHOR_ID).
    /// May be repeated; merges are done in order.
    #[arg(short, long = "merge", value_parser = parse_merge_spec)]
    merge: Vec<MergeSpec>,

    /// Remove columns that are gaps in every sequence
    #[arg(short, long = "remove-gaps")]
    remove_gaps: bool,

    /// Wrap output sequences at this width (0: no wrapping)
    #[arg(short = 'w', long = "line-width")]
    line_width: Option<usize>,

    /// Output file (default: standard output)
    #[arg(short, long)]
    output: Option<String>,

    /// Info mode: print a summary instead of the alignment
    #[arg(short, long)]
    info: bool,

    /// Print the info summary as JSON
    #[arg(long, requires = "info")]
    json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SeqFileFormat {
    #[clap(name = "fasta")]
    #[clap(alias = "f")]
    FastA,
    #[clap(name = "stockholm")]
    #[clap(alias = "s")]
    Stockholm,
}

impl fmt::Display for SeqFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeqFileFormat::FastA => "fasta",
            SeqFileFormat::Stockholm => "stockholm",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct MergeSpec {
    path: String,
    anchor: String,
}

// FILE:ANCHOR; the last ':' splits, so that paths may contain colons.
fn parse_merge_spec(arg: &str) -> Result<MergeSpec, String> {
    match arg.rsplit_once(':') {
        Some((path, anchor)) if !path.is_empty() && !anchor.is_empty() => Ok(MergeSpec {
            path: path.to_string(),
            anchor: anchor.to_string(),
        }),
        _ => Err(format!("expected FILE:ANCHOR_ID, got '{}'", arg)),
    }
}

#[derive(Debug, Serialize)]
struct AlignmentSummary<'a> {
    name: &'a str,
    nb_sequences: usize,
    nb_columns: usize,
    sequence_ids: Vec<String>,
}

fn read_alignment(path: &str, format: SeqFileFormat) -> Result<Alignment, MsaError> {
    let seq_file = match format {
        SeqFileFormat::FastA => read_fasta_file(path)?,
        SeqFileFormat::Stockholm => read_stockholm_file(path)?,
    };
    if !is_aligned(&seq_file) {
        return Err(MsaError::Format(format!(
            "{}: sequences differ in length (unaligned input?)",
            path
        )));
    }
    let alignment = Alignment::from_records(seq_file)?;
    info!(
        "read {} ({}): {} sequences, {} columns",
        path,
        format,
        alignment.count_sequences(),
        alignment.aln_len()
    );
    Ok(alignment)
}

fn load_config() -> Config {
    match find_config() {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                Config::default()
            }
        },
        None => Config::default(),
    }
}

fn output_info(name: &str, alignment: &Alignment, json: bool) -> Result<(), MsaError> {
    let summary = AlignmentSummary {
        name,
        nb_sequences: alignment.count_sequences(),
        nb_columns: alignment.aln_len(),
        sequence_ids: alignment.seq_ids().collect(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("name: {}", summary.name);
        println!("nb_sequences: {}", summary.nb_sequences);
        println!("nb_columns: {}", summary.nb_columns);
        println!();
    }
    Ok(())
}

fn write_alignment(
    alignment: &Alignment,
    output: Option<&Path>,
    line_width: usize,
) -> Result<(), MsaError> {
    let records = alignment.to_records();
    match output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_fasta(&mut out, &records, line_width)?;
            out.flush()?;
        }
        None => {
            let mut out = stdout().lock();
            write_fasta(&mut out, &records, line_width)?;
        }
    }
    Ok(())
}

fn process(cli: &Cli, config: &Config) -> Result<Alignment, MsaError> {
    let mut alignment = read_alignment(&cli.aln_fname, cli.format)?;
    for spec in &cli.merge {
        let patch = read_alignment(&spec.path, cli.format)?;
        alignment.merge_alignment(&patch, &spec.anchor)?;
    }
    if cli.remove_gaps || config.remove_gaps {
        alignment = alignment.remove_alignment_gaps();
    }
    Ok(alignment)
}

pub fn run() -> Result<(), MsaError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = load_config();
    let alignment = process(&cli, &config)?;

    if cli.info {
        return output_info(&cli.aln_fname, &alignment, cli.json);
    }

    let line_width = cli.line_width.unwrap_or(config.line_width);
    write_alignment(&alignment, cli.output.as_deref().map(Path::new), line_width)
}
