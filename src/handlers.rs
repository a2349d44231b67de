// src/handlers.rs
//
// Contact and guestbook submissions, independent of the HTTP layer. Storage
// failures are logged here. A failed write reaches the page as
// `Outcome::Failed`; a failed read of the guestbook only sets `list_failed`.

use chrono::NaiveDateTime;

use crate::error::ValidationError;
use crate::models::{ContactForm, GuestbookForm, StoredEntry};
use crate::record;
use crate::store::{self, FlatLog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Plain page view, nothing submitted.
    Shown,
    Accepted,
    Rejected(ValidationError),
    /// The submission could not be written to the log.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestbookView {
    pub outcome: Outcome,
    /// Most recent first.
    pub entries: Vec<StoredEntry>,
    /// The log could not be read; `entries` is empty.
    pub list_failed: bool,
}

pub fn submit_contact(log: &dyn FlatLog, form: &ContactForm, now: NaiveDateTime) -> Outcome {
    let msg = match form.validate(now) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::info!(missing = ?e.missing, "contact submission rejected");
            return Outcome::Rejected(e);
        }
    };

    match log.append(&record::serialize_contact(&msg)) {
        Ok(()) => {
            tracing::info!(
                log = %log.describe(),
                name_len = msg.name.len(),
                "contact message stored"
            );
            Outcome::Accepted
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to store contact message");
            Outcome::Failed
        }
    }
}

pub fn submit_guestbook(log: &dyn FlatLog, form: &GuestbookForm, now: NaiveDateTime) -> Outcome {
    let entry = match form.validate(now) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::info!(missing = ?e.missing, "guestbook submission rejected");
            return Outcome::Rejected(e);
        }
    };

    match log.append(&record::serialize_guestbook(&entry)) {
        Ok(()) => {
            tracing::info!(
                log = %log.describe(),
                name_len = entry.name.len(),
                "guestbook entry stored"
            );
            Outcome::Accepted
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to store guestbook entry");
            Outcome::Failed
        }
    }
}

/// Loads every entry for display after `outcome`. The list is read even when
/// the submission was rejected. A failed read empties the list but leaves
/// `outcome` as it was: an accepted entry stays accepted.
pub fn guestbook_view(log: &dyn FlatLog, outcome: Outcome) -> GuestbookView {
    match store::read_guestbook(log) {
        Ok(entries) => GuestbookView {
            outcome,
            entries,
            list_failed: false,
        },
        Err(e) => {
            tracing::error!(error = %e, "failed to read guestbook");
            GuestbookView {
                outcome,
                entries: Vec::new(),
                list_failed: true,
            }
        }
    }
}
