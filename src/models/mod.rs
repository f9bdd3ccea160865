//! Output records produced by prompt extraction.
//!
//! - [`ConversationRecord`] - one retained conversation with its metadata
//! - [`Prompt`] - one user-authored message inside a conversation
//!
//! The serde field order of these types is the field order of `extracted_prompts.json`.

pub mod prompt;

pub use prompt::{ConversationRecord, Prompt, UNKNOWN, UNTITLED_CONVERSATION, total_prompts};
