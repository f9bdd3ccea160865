use std::io::Write;

use anyhow::{Context, Result};

use crate::models::ConversationRecord;

/// Pretty-print the record set as a JSON array (two-space indent)
pub fn write_json<W: Write>(writer: &mut W, records: &[ConversationRecord]) -> Result<()> {
    serde_json::to_writer_pretty(writer, records).context("Failed to serialize extracted prompts")
}

/// Read a record set previously written by [`write_json`]
pub fn read_json(raw: &str) -> Result<Vec<ConversationRecord>> {
    serde_json::from_str(raw).context("Failed to parse extracted prompts JSON")
}
