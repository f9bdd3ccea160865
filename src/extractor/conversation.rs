use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::extractor::content::extract_prompts;
use crate::extractor::messages::locate_messages;
use crate::models::{ConversationRecord, UNKNOWN, UNTITLED_CONVERSATION};
use crate::parsers::fields::parse_date;
use crate::parsers::{field_text_or, first_present};

const TITLE_KEYS: &[&str] = &["title", "name"];
const ID_KEYS: &[&str] = &["id", "uuid"];
const CREATED_KEYS: &[&str] = &["created_at"];

/// Normalize one conversation object into a record
///
/// Every field has a fallback, so this never fails. `today` is used when the
/// conversation has no usable creation timestamp. The record may carry zero prompts;
/// callers decide whether to keep it.
pub fn normalize_conversation(
    conversation: &Map<String, Value>,
    today: NaiveDate,
) -> ConversationRecord {
    let title = field_text_or(conversation, TITLE_KEYS, UNTITLED_CONVERSATION);
    let id = field_text_or(conversation, ID_KEYS, UNKNOWN);
    let date = conversation_date(conversation, today);
    let prompts = extract_prompts(locate_messages(conversation));

    ConversationRecord { title, id, date, prompts }
}

fn conversation_date(conversation: &Map<String, Value>, today: NaiveDate) -> String {
    let date = match first_present(conversation, CREATED_KEYS) {
        Some(created) => parse_date(created).unwrap_or_else(|| {
            tracing::debug!(created_at = %created, "Unrecognised creation timestamp, using today");
            today
        }),
        None => today,
    };
    date.format("%Y-%m-%d").to_string()
}
