//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

pub const INPUT_FILENAME: &str = "conversations.json";

/// Builder for a temp directory holding an export file
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Write raw text as the export file
    pub fn with_raw(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(INPUT_FILENAME), content)
            .expect("Failed to write conversations.json");
        self
    }

    /// Write a JSON document as the export file
    pub fn with_document(self, document: &Value) -> Self {
        let content = serde_json::to_string_pretty(document).expect("Failed to serialize document");
        self.with_raw(&content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the export file inside a built directory
pub fn input_path(dir: &Path) -> PathBuf {
    dir.join(INPUT_FILENAME)
}

/// Builder for one conversation object
pub struct ConversationBuilder {
    fields: serde_json::Map<String, Value>,
    messages_key: String,
    messages: Vec<Value>,
}

impl ConversationBuilder {
    /// Create a conversation with a title, id and no messages
    pub fn new(title: &str) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("title".to_string(), json!(title));
        fields.insert("id".to_string(), json!(format!("id-{}", title.to_lowercase())));
        Self { fields, messages_key: "messages".to_string(), messages: Vec::new() }
    }

    /// Set an arbitrary metadata field
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Remove a metadata field
    pub fn without(mut self, key: &str) -> Self {
        self.fields.shift_remove(key);
        self
    }

    /// Store messages under a different key
    pub fn messages_key(mut self, key: &str) -> Self {
        self.messages_key = key.to_string();
        self
    }

    /// Add a message with `role: "user"` and string content
    pub fn user(mut self, content: &str) -> Self {
        self.messages.push(json!({"role": "user", "content": content}));
        self
    }

    /// Add a message with `role: "assistant"` and string content
    pub fn assistant(mut self, content: &str) -> Self {
        self.messages.push(json!({"role": "assistant", "content": content}));
        self
    }

    /// Add an arbitrary message object
    pub fn message(mut self, message: Value) -> Self {
        self.messages.push(message);
        self
    }

    /// Convert to a JSON value
    pub fn to_value(&self) -> Value {
        let mut fields = self.fields.clone();
        fields.insert(self.messages_key.clone(), Value::Array(self.messages.clone()));
        Value::Object(fields)
    }
}

/// `{"conversations": [...]}` built from conversation builders
pub fn conversations_document(conversations: &[ConversationBuilder]) -> Value {
    let values: Vec<Value> = conversations.iter().map(ConversationBuilder::to_value).collect();
    json!({ "conversations": values })
}

/// Helper to create a realistic export in the `chat_messages` / `sender` layout
pub fn realistic_export() -> Value {
    json!([
        {
            "uuid": "5f2c0e4a-0000-4000-8000-000000000001",
            "name": "Planning a trip",
            "created_at": "2024-06-01T09:15:00.000000Z",
            "chat_messages": [
                {
                    "sender": "human",
                    "text": "Where should I go in June?",
                    "created_at": "2024-06-01T09:15:00Z"
                },
                {"sender": "assistant", "text": "Consider Lisbon."},
                {
                    "sender": "human",
                    "text": "What about \"Porto\", too?",
                    "created_at": "2024-06-01T09:16:00Z"
                }
            ]
        },
        {
            "uuid": "5f2c0e4a-0000-4000-8000-000000000002",
            "name": "",
            "created_at": "2024-06-02T10:00:00Z",
            "chat_messages": []
        },
        {
            "uuid": "5f2c0e4a-0000-4000-8000-000000000003",
            "name": "Code review",
            "created_at": "2024-06-03T11:00:00Z",
            "chat_messages": [
                {
                    "sender": "human",
                    "content": [{"type": "text", "text": "Review this:"}, "fn main() {}"]
                }
            ]
        }
    ])
}
