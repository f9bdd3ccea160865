use serde_json::{Map, Value};

use crate::models::{Prompt, UNKNOWN};
use crate::parsers::{field_text, field_text_or, first_present, value_to_text};

/// Fields that may name the author of a message, checked in order
pub const ROLE_KEYS: &[&str] = &["role", "sender", "author"];

/// Author values that mark a message as written by the user (exact, case-sensitive)
pub const USER_ROLES: &[&str] = &["human", "user"];

const TIMESTAMP_KEYS: &[&str] = &["created_at", "timestamp", "time"];
const PART_TEXT_KEYS: &[&str] = &["text", "value"];

/// Which rule produced a message's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// `content` is a string
    Content,
    /// `content` is an array of parts joined with newlines
    ContentParts,
    /// Top-level `text` field
    Text,
    /// Top-level `value` field
    Value,
    /// Nested `message` field
    NestedMessage,
    /// Nothing recognisable: the whole message serialized as JSON
    FullDump,
}

/// Whether a message was written by the user
pub fn is_user_message(message: &Map<String, Value>) -> bool {
    ROLE_KEYS.iter().any(|key| {
        message.get(*key).and_then(Value::as_str).is_some_and(|role| USER_ROLES.contains(&role))
    })
}

/// Extract the textual content of a message
///
/// Never fails: when no known content field is present the message is dumped as JSON.
pub fn extract_content(message: &Map<String, Value>) -> (String, ContentSource) {
    match message.get("content") {
        Some(Value::String(text)) => return (text.clone(), ContentSource::Content),
        Some(Value::Array(parts)) => return (join_parts(parts), ContentSource::ContentParts),
        _ => {}
    }

    if let Some(text) = field_text(message, &["text"]) {
        return (text, ContentSource::Text);
    }
    if let Some(value) = field_text(message, &["value"]) {
        return (value, ContentSource::Value);
    }
    if let Some(nested) = first_present(message, &["message"]) {
        return (value_to_text(nested), ContentSource::NestedMessage);
    }

    (full_dump(message), ContentSource::FullDump)
}

fn join_parts(parts: &[Value]) -> String {
    parts.iter().map(part_text).collect::<Vec<_>>().join("\n")
}

fn part_text(part: &Value) -> String {
    match part {
        Value::String(text) => text.clone(),
        Value::Object(object) => {
            field_text(object, PART_TEXT_KEYS).unwrap_or_else(|| part.to_string())
        }
        other => other.to_string(),
    }
}

fn full_dump(message: &Map<String, Value>) -> String {
    // Serializing a map of JSON values cannot fail
    serde_json::to_string(message).unwrap_or_default()
}

/// Timestamp of a message, or `"unknown"`
pub fn extract_timestamp(message: &Map<String, Value>) -> String {
    field_text_or(message, TIMESTAMP_KEYS, UNKNOWN)
}

/// Keep user-authored messages, in order, as prompts
///
/// Entries that are not objects are skipped.
pub fn extract_prompts(messages: &[Value]) -> Vec<Prompt> {
    messages
        .iter()
        .filter_map(Value::as_object)
        .filter(|message| is_user_message(message))
        .map(|message| {
            let (content, source) = extract_content(message);
            if source == ContentSource::FullDump {
                tracing::debug!("No content field recognised, keeping the full message");
            }
            Prompt { timestamp: extract_timestamp(message), content }
        })
        .collect()
}
