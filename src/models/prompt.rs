use serde::{Deserialize, Serialize};

pub const UNTITLED_CONVERSATION: &str = "Untitled Conversation";
pub const UNKNOWN: &str = "unknown";

/// One user-authored message pulled out of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub timestamp: String,
    pub content: String,
}

/// A conversation that produced at least one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub title: String,
    pub id: String,
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    pub prompts: Vec<Prompt>,
}

impl ConversationRecord {
    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }
}

/// Total number of prompts across a record set (one CSV row each)
pub fn total_prompts(records: &[ConversationRecord]) -> usize {
    records.iter().map(ConversationRecord::prompt_count).sum()
}
