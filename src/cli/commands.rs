use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::extractor::{ConversationSource, extract_located, locate_conversations};
use crate::inspect::write_structure_report;
use crate::output::{output_paths, write_outputs};
use crate::parsers::load_document;
use crate::utils::format_path_with_tilde;

#[derive(Parser, Debug)]
#[command(name = "prompt-extract")]
#[command(version = "0.1.0")]
#[command(
    about = "Extract your own prompts from an exported conversations.json",
    long_about = None
)]
pub struct Cli {
    /// Path to the exported conversations file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the structure of the file instead of extracting prompts
    #[arg(long)]
    pub debug: bool,

    /// Directory for extracted_prompts.json and extracted_prompts.csv
    /// (defaults to the input file's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Show diagnostic logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.debug {
        return show_structure(&cli.input);
    }
    extract(&cli.input, cli.output_dir.as_deref())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn show_structure(input: &Path) -> Result<()> {
    let document = load_document(input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_structure_report(&mut out, &document).context("Failed to write structure report")?;
    out.flush()?;
    Ok(())
}

fn extract(input: &Path, output_dir: Option<&Path>) -> Result<()> {
    let document = load_document(input)?;
    let located = locate_conversations(&document)?;
    if let ConversationSource::ScannedKey(key) = &located.source {
        println!("Found conversations in '{}' property", key);
    }
    let records = extract_located(&located, Utc::now().date_naive());

    let paths = output_paths(input, output_dir);
    write_outputs(&paths, &records)?;

    println!(
        "Extracted {} conversations with prompts to {}",
        records.len(),
        format_path_with_tilde(&paths.json)
    );
    println!("Also exported data to CSV format at {}", format_path_with_tilde(&paths.csv));

    Ok(())
}
