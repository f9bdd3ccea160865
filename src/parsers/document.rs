use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read the export file and parse it as a single JSON document
pub fn load_document(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    parse_document(&raw).with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

/// Parse an in-memory export document
pub fn parse_document(raw: &str) -> Result<Value> {
    // Exports saved from some editors carry a UTF-8 BOM
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let value = serde_json::from_str(raw)?;
    Ok(value)
}
