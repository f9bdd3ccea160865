use std::io::{self, Write};

use serde_json::Value;

use crate::extractor::locate_messages;
use crate::extractor::structure::CONVERSATIONS_KEY;

/// Nesting limit for the recursive array search
pub const MAX_DEPTH: usize = 64;

/// Print a description of the document's shape without extracting anything
///
/// Reports top-level keys, the sample conversation and message keys when a
/// `conversations` array exists, and otherwise every non-empty array found by walking
/// nested objects. For an array root every element is walked, under `[index]` paths.
pub fn write_structure_report<W: Write>(writer: &mut W, document: &Value) -> io::Result<()> {
    writeln!(writer, "File structure analysis:")?;
    match document {
        Value::Object(object) => {
            writeln!(writer, "Top-level keys: {}", format_keys(object.keys()))?;
        }
        Value::Array(list) => {
            writeln!(writer, "Top-level value is an array with {} items", list.len())?;
        }
        other => writeln!(writer, "Top-level value is {}", kind(other))?,
    }

    if let Some(conversations) = document.get(CONVERSATIONS_KEY).and_then(Value::as_array) {
        write_conversations_sample(writer, conversations)?;
    } else {
        writeln!(writer, "No 'conversations' array found. Analyzing structure further...")?;
        if let Value::Array(list) = document {
            writeln!(writer, "The file contains an array with {} items", list.len())?;
            if let Some(first) = list.first() {
                writeln!(writer, "First item keys: {}", keys_of(first))?;
            }
            for (index, item) in list.iter().enumerate() {
                find_arrays(writer, item, &format!("[{}]", index), 1)?;
            }
        } else {
            find_arrays(writer, document, "", 0)?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "Please analyze the structure and adjust the export accordingly")?;
    Ok(())
}

fn write_conversations_sample<W: Write>(
    writer: &mut W,
    conversations: &[Value],
) -> io::Result<()> {
    writeln!(writer, "Found 'conversations' array with {} items", conversations.len())?;
    let Some(first) = conversations.first() else {
        return Ok(());
    };
    writeln!(writer, "Sample conversation keys: {}", keys_of(first))?;

    let sample_message = first.as_object().and_then(|conv| locate_messages(conv).first());
    match sample_message {
        Some(message) => writeln!(writer, "Sample message keys: {}", keys_of(message)),
        None => writeln!(writer, "No 'messages' found in conversation"),
    }
}

/// Depth-first walk over nested objects, reporting every non-empty array field
fn find_arrays<W: Write>(
    writer: &mut W,
    value: &Value,
    path: &str,
    depth: usize,
) -> io::Result<()> {
    if depth >= MAX_DEPTH {
        writeln!(writer, "Stopped descending at '{}' (depth limit {})", path, MAX_DEPTH)?;
        return Ok(());
    }
    let Some(object) = value.as_object() else {
        return Ok(());
    };

    for (key, child) in object {
        let child_path = if path.is_empty() { key.clone() } else { format!("{}.{}", path, key) };
        match child {
            Value::Array(list) if !list.is_empty() => {
                writeln!(writer, "Found array at '{}' with {} items", child_path, list.len())?;
                if list[0].is_object() {
                    let keys = keys_of(&list[0]);
                    writeln!(writer, "Sample item keys at '{}': {}", child_path, keys)?;
                }
            }
            Value::Object(_) => find_arrays(writer, child, &child_path, depth + 1)?,
            _ => {}
        }
    }
    Ok(())
}

fn keys_of(value: &Value) -> String {
    match value.as_object() {
        Some(object) => format_keys(object.keys()),
        None => format!("(not an object: {})", kind(value)),
    }
}

fn format_keys<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    let quoted: Vec<String> = keys.map(|key| format!("'{}'", key)).collect();
    format!("[{}]", quoted.join(", "))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
