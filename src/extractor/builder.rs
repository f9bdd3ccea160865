//! Prompt extraction over a whole export document.
//!
//! # Error Handling Strategy
//!
//! - **Whole-run failure**: only the Structure Locator can fail. A document without a
//!   recognisable conversation list aborts the run with an error pointing at `--debug`.
//! - **Local degradation**: missing metadata falls back to defaults, messages without a
//!   known content field are dumped as JSON, and conversations without user prompts are
//!   dropped. None of these are reported as errors.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::extractor::conversation::normalize_conversation;
use crate::extractor::structure::{
    ConversationSource, LocatedConversations, locate_conversations,
};
use crate::models::{ConversationRecord, total_prompts};

/// Extract every conversation with at least one user prompt, in document order
///
/// Conversations without a creation timestamp are dated with today's UTC date.
///
/// # Errors
///
/// Returns an error if no conversation list can be located in `document`.
///
/// # Examples
///
/// ```
/// use prompt_extract::extract_conversations;
/// use serde_json::json;
///
/// let document = json!({
///     "conversations": [
///         {"title": "Greeting", "messages": [{"role": "user", "content": "hi"}]}
///     ]
/// });
/// let records = extract_conversations(&document)?;
/// assert_eq!(records[0].prompts[0].content, "hi");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn extract_conversations(document: &Value) -> Result<Vec<ConversationRecord>> {
    extract_conversations_at(document, Utc::now().date_naive())
}

/// Same as [`extract_conversations`] with an explicit fallback date
pub fn extract_conversations_at(
    document: &Value,
    today: NaiveDate,
) -> Result<Vec<ConversationRecord>> {
    let located = locate_conversations(document)?;
    Ok(extract_located(&located, today))
}

/// Normalize an already located conversation list, dropping conversations without prompts
pub fn extract_located(
    located: &LocatedConversations<'_>,
    today: NaiveDate,
) -> Vec<ConversationRecord> {
    match &located.source {
        ConversationSource::CanonicalKey => {
            tracing::debug!("Found conversations under the 'conversations' key")
        }
        ConversationSource::RootArray => tracing::debug!("Document is an array of conversations"),
        ConversationSource::ScannedKey(key) => {
            tracing::debug!("Found conversations in '{}' property", key)
        }
    }

    let total = located.conversations.len();
    let records: Vec<ConversationRecord> = located
        .conversations
        .iter()
        .filter_map(Value::as_object)
        .map(|conversation| normalize_conversation(conversation, today))
        .filter(|record| !record.prompts.is_empty())
        .collect();

    tracing::debug!(
        "Kept {} of {} conversations ({} without user prompts), {} prompts in total",
        records.len(),
        total,
        total - records.len(),
        total_prompts(&records)
    );

    records
}
