// src/models.rs

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::render::escape_html;

/// Server-local write time, as stored in the `Date:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Contact form body as posted. Absent fields deserialize as empty strings
/// so they fail validation instead of the extractor.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Guestbook form body as posted.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GuestbookForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// A validated contact submission. Text fields are HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

/// A validated guestbook submission. Text fields are HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestbookEntry {
    pub name: String,
    pub message: String,
    pub timestamp: String,
}

/// A guestbook entry read back from the log. A field is `None` when its
/// line was missing from the chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredEntry {
    pub name: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
}

impl StoredEntry {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.message.is_none() && self.date.is_none()
    }
}

/// Trims, normalizes line endings and escapes one form field.
fn clean(raw: &str) -> String {
    escape_html(&raw.trim().replace("\r\n", "\n"))
}

fn require(missing: &mut Vec<&'static str>, field: &'static str, value: &str) {
    if value.is_empty() {
        missing.push(field);
    }
}

impl ContactForm {
    /// Name, email and message are required; subject may be empty.
    pub fn validate(&self, at: NaiveDateTime) -> Result<ContactMessage, ValidationError> {
        let msg = ContactMessage {
            name: clean(&self.name),
            email: clean(&self.email),
            subject: clean(&self.subject),
            message: clean(&self.message),
            timestamp: format_timestamp(at),
        };

        let mut missing = Vec::new();
        require(&mut missing, "name", &msg.name);
        require(&mut missing, "email", &msg.email);
        require(&mut missing, "message", &msg.message);

        if missing.is_empty() {
            Ok(msg)
        } else {
            Err(ValidationError { missing })
        }
    }
}

impl GuestbookForm {
    pub fn validate(&self, at: NaiveDateTime) -> Result<GuestbookEntry, ValidationError> {
        let entry = GuestbookEntry {
            name: clean(&self.name),
            message: clean(&self.message),
            timestamp: format_timestamp(at),
        };

        let mut missing = Vec::new();
        require(&mut missing, "name", &entry.name);
        require(&mut missing, "message", &entry.message);

        if missing.is_empty() {
            Ok(entry)
        } else {
            Err(ValidationError { missing })
        }
    }
}
