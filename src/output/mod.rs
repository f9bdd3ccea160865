//! Writers for the extracted record set
//!
//! The same records are written twice, next to the input file by default:
//! - `extracted_prompts.json`: pretty-printed array of conversation records
//! - `extracted_prompts.csv`: one quoted row per prompt
//!
//! Both files are written atomically (temp file + rename).

pub mod csv;
pub mod json;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::ConversationRecord;
use crate::utils::write_all_atomic;

pub use csv::{CSV_HEADER, quote_field, render_csv, write_csv};
pub use json::{read_json, write_json};

pub const JSON_FILENAME: &str = "extracted_prompts.json";
pub const CSV_FILENAME: &str = "extracted_prompts.csv";

/// Destination paths for both output files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

/// Output paths in `output_dir`, or next to `input` when no directory is given
pub fn output_paths(input: &Path, output_dir: Option<&Path>) -> OutputPaths {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };
    OutputPaths { json: dir.join(JSON_FILENAME), csv: dir.join(CSV_FILENAME) }
}

/// Write both output files
///
/// Both are staged as temp files before either is renamed into place, so a failure
/// while writing leaves neither output behind.
pub fn write_outputs(paths: &OutputPaths, records: &[ConversationRecord]) -> Result<()> {
    let mut json = Vec::new();
    write_json(&mut json, records)?;

    let mut csv = Vec::new();
    write_csv(&mut csv, records).context("Failed to render CSV")?;

    write_all_atomic(&[
        (paths.json.as_path(), json.as_slice()),
        (paths.csv.as_path(), csv.as_slice()),
    ])
    .context("Failed to write extracted prompts")
}
