//! Prompt Extract - pull your own prompts out of exported chat conversations
//!
//! Conversation exports change shape between versions: the conversation list may sit
//! under `conversations`, be the document itself, or hide under another key; messages
//! may live under `messages`, `message_tree`, `turns` or something else; content may be a
//! string, a list of parts, or nested. This library locates all of that heuristically and
//! normalizes the user-authored messages into a flat record set.
//!
//! - Locating conversations and messages in documents of unknown shape
//! - Normalizing conversation metadata with fallbacks
//! - Extracting user prompts from heterogeneous content encodings
//! - Writing the result as pretty JSON and as CSV
//! - Describing a document's shape for `--debug`
//!
//! # Example
//!
//! ```no_run
//! use prompt_extract::{extract_conversations, load_document};
//! use std::path::Path;
//!
//! let document = load_document(Path::new("conversations.json"))?;
//! let records = extract_conversations(&document)?;
//! println!("Found prompts in {} conversations", records.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod extractor;
pub mod inspect;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use extractor::{
    ConversationSource, extract_conversations, extract_conversations_at, extract_located,
    locate_conversations,
};
pub use models::{ConversationRecord, Prompt};
pub use output::{output_paths, write_outputs};
pub use parsers::load_document;
