//! Heuristic prompt extraction from conversation exports of unknown shape
//!
//! The pipeline runs in one direction:
//!
//! - [`structure`] finds the conversation list inside the document.
//! - [`conversation`] normalizes each conversation's title, id and date.
//! - [`messages`] finds each conversation's message list.
//! - [`content`] keeps user-authored messages and pulls their text out.
//! - [`builder`] wires the stages together and drops conversations without prompts.
//!
//! Each stage checks a fixed, ordered list of known key names before falling back to a
//! generic scan, so new export versions usually keep working without code changes.

pub mod builder;
pub mod content;
pub mod conversation;
pub mod messages;
pub mod structure;

pub use builder::{extract_conversations, extract_conversations_at, extract_located};
pub use content::{extract_content, extract_prompts, is_user_message};
pub use conversation::normalize_conversation;
pub use messages::locate_messages;
pub use structure::{ConversationSource, LocatedConversations, locate_conversations};
