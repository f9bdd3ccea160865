use std::io::{self, Write};

use crate::models::ConversationRecord;

pub const CSV_HEADER: &str = "Conversation Title,Conversation ID,Date,Prompt";

/// Wrap a field in double quotes, doubling any embedded quotes
///
/// Commas and newlines are left as-is; the surrounding quotes make them part of the field.
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render one row per prompt, conversation metadata repeated on each row
///
/// Rows are joined with `\n` and the output has no trailing newline.
pub fn render_csv(records: &[ConversationRecord]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    for record in records {
        for prompt in &record.prompts {
            lines.push(
                [&record.title, &record.id, &record.date, &prompt.content]
                    .map(|field| quote_field(field))
                    .join(","),
            );
        }
    }
    lines.join("\n")
}

pub fn write_csv<W: Write>(writer: &mut W, records: &[ConversationRecord]) -> io::Result<()> {
    writer.write_all(render_csv(records).as_bytes())
}
