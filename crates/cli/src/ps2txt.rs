//! ps2txt - Extract shown text from PostScript files
//!
//! A command line tool that prints the strings painted by PostScript
//! show-family operators, as plain text or JSON records.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use pstext_core::extractor::{ExtractData, PsConfig};
use pstext_core::high_level::extract_ps_texts;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Output type for the extracted content.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
enum OutputType {
    /// Plain text, one line per file (default)
    #[default]
    Text,
    /// One JSON record per file
    Json,
}

/// Extract shown text from PostScript files.
#[derive(Parser, Debug)]
#[command(name = "ps2txt")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// One or more paths to PostScript files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Text encoding of the input files
    #[arg(short = 'c', long, default_value = "utf-8")]
    codec: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "text")]
    output_type: OutputType,

    /// Number of worker threads (default: available parallelism)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Report failing files and continue with the rest
    #[arg(long = "keep-going", action = ArgAction::SetTrue)]
    keep_going: bool,
}

/// JSON output record.
#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ExtractData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Set up tracing on stderr.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_level),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Outcome of one input file.
enum Outcome {
    Text(String),
    NoText(String),
    Failed(String),
}

fn read_inputs(files: &[PathBuf]) -> (Vec<Vec<u8>>, Vec<Option<String>>) {
    let mut contents = Vec::with_capacity(files.len());
    let mut read_errors = Vec::with_capacity(files.len());
    for path in files {
        match fs::read(path) {
            Ok(bytes) => {
                contents.push(bytes);
                read_errors.push(None);
            }
            Err(e) => {
                contents.push(Vec::new());
                read_errors.push(Some(format!("{}: {}", path.display(), e)));
            }
        }
    }
    (contents, read_errors)
}

fn process(args: &Args) -> Result<Vec<Outcome>> {
    let config = PsConfig::default().with_encoding(args.codec.clone());
    let (contents, read_errors) = read_inputs(&args.files);
    tracing::debug!(files = contents.len(), encoding = %args.codec, "extracting");
    let results = extract_ps_texts(&contents, &config, args.threads)?;

    Ok(results
        .into_iter()
        .zip(read_errors)
        .map(|(result, read_error)| match (read_error, result) {
            (Some(message), _) => Outcome::Failed(message),
            (None, Ok(text)) => Outcome::Text(text),
            (None, Err(e)) if e.is_unsupported() => Outcome::NoText(e.to_string()),
            (None, Err(e)) => Outcome::Failed(error_chain(&e)),
        })
        .collect())
}

/// Error message followed by its causes.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn write_outcome(
    output: &mut dyn Write,
    path: &Path,
    outcome: &Outcome,
    output_type: OutputType,
) -> Result<()> {
    let file = path.to_string_lossy();
    match output_type {
        OutputType::Text => {
            if let Outcome::Text(text) = outcome {
                writeln!(output, "{text}")?;
            }
        }
        OutputType::Json => {
            let record = match outcome {
                Outcome::Text(text) => {
                    let mut data = ExtractData::new(text.as_str());
                    data.put_value(ExtractData::RESOURCE_NAME_KEY, file.to_string());
                    FileRecord {
                        file: &file,
                        data: Some(data),
                        error: None,
                    }
                }
                Outcome::NoText(message) | Outcome::Failed(message) => FileRecord {
                    file: &file,
                    data: None,
                    error: Some(message.clone()),
                },
            };
            serde_json::to_writer(&mut *output, &record)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let outcomes = process(&args)?;

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("Failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    let mut failed = false;
    for (path, outcome) in args.files.iter().zip(&outcomes) {
        write_outcome(&mut output, path, outcome, args.output_type)?;
        match outcome {
            Outcome::Text(_) => {}
            Outcome::NoText(message) => {
                eprintln!("Warning: {}: {}", path.display(), message);
            }
            Outcome::Failed(message) => {
                eprintln!("Error processing {}: {}", path.display(), message);
                failed = true;
                if !args.keep_going {
                    output.flush()?;
                    std::process::exit(1);
                }
            }
        }
    }

    output.flush()?;
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
