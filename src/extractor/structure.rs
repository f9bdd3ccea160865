use anyhow::{Result, bail};
use serde_json::Value;

use crate::parsers::has_any_field;

/// Top-level key used by the standard export layout
pub const CONVERSATIONS_KEY: &str = "conversations";

/// Fields that mark an object as conversation-like during the fallback scan
const CONVERSATION_MARKERS: &[&str] = &["title", "id", "messages", "name"];

/// How the conversation list was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationSource {
    /// `{"conversations": [...]}`
    CanonicalKey,
    /// The document itself is the list
    RootArray,
    /// First top-level field holding conversation-like objects
    ScannedKey(String),
}

/// Conversation list located inside a document, in source order
#[derive(Debug)]
pub struct LocatedConversations<'a> {
    pub source: ConversationSource,
    pub conversations: &'a [Value],
}

/// Find the list of conversations inside an export document
///
/// Strategies are tried in order and the first match wins:
/// 1. a non-empty array under `conversations`
/// 2. the document itself, when it is an array
/// 3. the first top-level field holding a non-empty array whose first element has a
///    `title`, `id`, `messages` or `name` field (document key order)
///
/// # Errors
///
/// Returns an error if no strategy yields a non-empty list. This is fatal for the run.
pub fn locate_conversations(document: &Value) -> Result<LocatedConversations<'_>> {
    match find_conversations(document) {
        Some(located) if !located.conversations.is_empty() => Ok(located),
        _ => bail!(
            "Could not find conversations in the file. \
             Try running with --debug to analyze the structure."
        ),
    }
}

fn find_conversations(document: &Value) -> Option<LocatedConversations<'_>> {
    if let Some(list) = document.get(CONVERSATIONS_KEY).and_then(Value::as_array)
        && !list.is_empty()
    {
        return Some(LocatedConversations {
            source: ConversationSource::CanonicalKey,
            conversations: list,
        });
    }

    if let Value::Array(list) = document {
        return Some(LocatedConversations {
            source: ConversationSource::RootArray,
            conversations: list,
        });
    }

    let object = document.as_object()?;
    object.iter().find_map(|(key, value)| {
        let list = value.as_array()?;
        let first = list.first()?;
        if !has_any_field(first, CONVERSATION_MARKERS) {
            return None;
        }
        Some(LocatedConversations {
            source: ConversationSource::ScannedKey(key.clone()),
            conversations: list,
        })
    })
}
