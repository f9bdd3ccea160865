//! Input loading and lenient field access for conversation exports
//!
//! # Error Handling Strategy
//!
//! Only two things can fail here, and both are fatal for the run:
//!
//! - **Unreadable input**: the file cannot be opened or is not valid UTF-8.
//! - **Invalid JSON**: the document does not parse.
//!
//! Everything below the document root is read through the helpers in [`fields`], which
//! never fail. Missing or oddly typed fields fall back to defaults instead.

pub mod document;
pub mod fields;

pub use document::{load_document, parse_document};
pub use fields::{field_text, field_text_or, first_present, has_any_field, is_truthy, value_to_text};
