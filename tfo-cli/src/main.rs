//! # TFO CLI - Triplex Stability Predictor
//!
//! A command-line interface for the TFO nearest-neighbour thermodynamic model.
//!
//! ## Usage
//!
//! ```bash
//! # Single oligo
//! tfo -s CUUCUCUCUUUUCCU --ph 7.2 --tfo-conc 5 --dup-conc 10
//!
//! # Canonical sample input
//! tfo --sample
//!
//! # Every record of a FASTA file, as TSV
//! tfo -i oligos.fasta --ph 6.8 --tfo-conc 2 --dup-conc 4 -f tsv -o oligos.tsv
//! ```
//!
//! ## Options
//!
//! - `-s, --sequence <SEQ>`: Oligo sequence of Cs and Us
//! - `-i, --input <FILE>`: Input FASTA file
//! - `--sample`: Use the sample oligo and its conditions
//! - `--ph <PH>`: pH in [4.5, 8]
//! - `--tfo-conc <UM>`: Oligo concentration (uM)
//! - `--dup-conc <UM>`: Duplex concentration (uM)
//! - `-f, --format <FORMAT>`: Output format: text, json, tsv (default: text)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-t, --threads <N>`: Worker threads for FASTA input (default: all cores)
//! - `-q, --quiet`: Suppress progress messages
//!
//! The process exits with a failure status if any record could not be
//! predicted; the remaining records are still written.

mod logging;

use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, value_parser};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tfo_core::config::{OutputFormat, TfoConfig};
use tfo_core::constants::{
    SAMPLE_DUP_CONC, SAMPLE_PH, SAMPLE_SEQUENCE, SAMPLE_TFO_CONC, VERSION,
};
use tfo_core::output::write_results;
use tfo_core::types::Conditions;
use tfo_core::TfoAnalyzer;
use tracing::info;

fn build_cli() -> Command {
    Command::new("tfo")
        .version(VERSION)
        .about("Triplex-forming oligonucleotide stability predictor")
        .arg(
            Arg::new("sequence")
                .short('s')
                .long("sequence")
                .value_name("SEQ")
                .help("Oligo sequence (Cs and Us only)"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input FASTA file"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .action(ArgAction::SetTrue)
                .help("Use the sample oligo CUUCUCUCUUUUCCU at pH 7.2, 5 uM TFO, 10 uM duplex"),
        )
        .group(
            ArgGroup::new("source")
                .args(["sequence", "input", "sample"])
                .required(true),
        )
        .arg(
            Arg::new("ph")
                .long("ph")
                .value_name("PH")
                .value_parser(value_parser!(f64))
                .help("pH, from 4.5 to 8"),
        )
        .arg(
            Arg::new("tfo-conc")
                .long("tfo-conc")
                .value_name("UM")
                .value_parser(value_parser!(f64))
                .help("TFO concentration (uM)"),
        )
        .arg(
            Arg::new("dup-conc")
                .long("dup-conc")
                .value_name("UM")
                .value_parser(value_parser!(f64))
                .help("Duplex concentration (uM)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text, json, tsv")
                .default_value("text"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Worker threads for FASTA input"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
}

/// Reads a condition flag, falling back to the sample value with `--sample`.
fn condition(matches: &ArgMatches, id: &str, sample: f64) -> Result<f64, String> {
    match matches.get_one::<f64>(id) {
        Some(value) => Ok(*value),
        None if matches.get_flag("sample") => Ok(sample),
        None => Err(format!("Missing required condition --{id}")),
    }
}

/// Main entry point for the TFO CLI application.
///
/// Parses command-line arguments, validates the conditions, predicts every
/// requested oligo and writes results in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_cli().get_matches();

    let quiet = matches.get_flag("quiet");
    logging::init_logging(quiet);

    let output_format = matches
        .get_one::<String>("format")
        .map_or("text", String::as_str)
        .parse::<OutputFormat>()
        .map_err(|e| e.to_string())?;

    let config = TfoConfig {
        output_format,
        num_threads: matches.get_one::<usize>("threads").copied(),
        quiet,
    };

    let conditions = Conditions::new(
        condition(&matches, "ph", SAMPLE_PH)?,
        condition(&matches, "tfo-conc", SAMPLE_TFO_CONC)?,
        condition(&matches, "dup-conc", SAMPLE_DUP_CONC)?,
    )
    .map_err(|e| e.to_string())?;

    let analyzer = TfoAnalyzer::with_config(config).map_err(|e| e.to_string())?;
    let results = if let Some(input_file) = matches.get_one::<String>("input") {
        analyzer
            .analyze_fasta_file(input_file, conditions)
            .map_err(|e| e.to_string())?
    } else {
        let sequence = matches
            .get_one::<String>("sequence")
            .map_or(SAMPLE_SEQUENCE, String::as_str);
        vec![analyzer.analyze_sequence(sequence, conditions, None)]
    };

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    write_results(&mut writer, &results, analyzer.config.output_format)
        .map_err(|e| e.to_string())?;
    writer.flush()?;

    let failed = results.iter().filter(|r| !r.is_success()).count();
    info!(
        "Prediction complete: {} of {} records succeeded.",
        results.len() - failed,
        results.len()
    );

    if failed > 0 {
        return Err(format!("{failed} of {} records could not be predicted", results.len()).into());
    }
    Ok(())
}
