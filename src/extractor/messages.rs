use serde_json::{Map, Value};

use crate::parsers::has_any_field;

/// Keys checked for a message array, in priority order
pub const MESSAGE_KEYS: &[&str] = &["messages", "message_tree", "turns"];

/// Fields that mark an object as message-like during the fallback scan
const MESSAGE_MARKERS: &[&str] = &["role", "sender", "content"];

/// Find the message list of one conversation, in source order
///
/// An array under `messages`, `message_tree` or `turns` wins even when empty. Otherwise the
/// first field holding a non-empty array whose first element has a `role`, `sender` or
/// `content` field is used. Conversations without either yield an empty slice.
pub fn locate_messages(conversation: &Map<String, Value>) -> &[Value] {
    if let Some(list) = MESSAGE_KEYS.iter().find_map(|key| conversation.get(*key)?.as_array()) {
        return list;
    }

    conversation
        .values()
        .filter_map(Value::as_array)
        .find(|list| list.first().is_some_and(|first| has_any_field(first, MESSAGE_MARKERS)))
        .map(Vec::as_slice)
        .unwrap_or_default()
}
