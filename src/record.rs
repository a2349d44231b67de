// src/record.rs
//
// Text format of the flat logs. One record is a block of `Field: value`
// lines closed by a line holding exactly `---`. Values are written as-is:
// a value that itself contains a `---` line splits the record when read back.

use crate::models::{ContactMessage, GuestbookEntry, StoredEntry};

pub const SEPARATOR: &str = "---";

const NAME: &str = "Name:";
const MESSAGE: &str = "Message:";
const DATE: &str = "Date:";

/// Serializes an entry as one complete record block.
pub fn serialize_guestbook(entry: &GuestbookEntry) -> String {
    format!(
        "{NAME} {}\n{MESSAGE} {}\n{DATE} {}\n{SEPARATOR}\n",
        entry.name, entry.message, entry.timestamp
    )
}

pub fn serialize_contact(msg: &ContactMessage) -> String {
    format!(
        "{NAME} {}\nEmail: {}\nSubject: {}\n{MESSAGE} {}\n{DATE} {}\n{SEPARATOR}\n",
        msg.name, msg.email, msg.subject, msg.message, msg.timestamp
    )
}

/// Parses a guestbook log into entries, in file order.
///
/// Malformed data never fails the read: unknown lines are skipped and a
/// chunk without any known field is dropped.
pub fn parse_guestbook(content: &str) -> Vec<StoredEntry> {
    split_chunks(content)
        .into_iter()
        .filter_map(|chunk| parse_chunk(&chunk))
        .collect()
}

fn split_chunks(content: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        if line.trim_end_matches('\r') == SEPARATOR {
            chunks.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    // Unterminated tail, e.g. a truncated write.
    chunks.push(current);

    chunks
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

fn field_value(rest: &str) -> String {
    rest.strip_prefix(' ').unwrap_or(rest).trim_end_matches('\r').to_string()
}

fn parse_chunk(chunk: &str) -> Option<StoredEntry> {
    let mut entry = StoredEntry::default();

    for line in chunk.lines() {
        let slot = if let Some(rest) = line.strip_prefix(NAME) {
            Some((&mut entry.name, rest))
        } else if let Some(rest) = line.strip_prefix(MESSAGE) {
            Some((&mut entry.message, rest))
        } else if let Some(rest) = line.strip_prefix(DATE) {
            Some((&mut entry.date, rest))
        } else {
            None
        };

        match slot {
            Some((field, rest)) if field.is_none() => *field = Some(field_value(rest)),
            Some(_) => tracing::debug!(line, "duplicate field in guestbook record, keeping the first"),
            None => tracing::debug!(line, "skipping unrecognized guestbook line"),
        }
    }

    if entry.is_empty() {
        tracing::debug!(chunk, "dropping guestbook chunk without known fields");
        return None;
    }
    Some(entry)
}
