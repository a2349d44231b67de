// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage Error ({}): {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Server Error: {0}")]
    Server(String),
}

impl SiteError {
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Storage {
            path: path.into(),
            source,
        }
    }
}

/// A submission whose required fields were empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_missing_fields() {
        let err = ValidationError {
            missing: vec!["name", "message"],
        };
        assert_eq!(err.to_string(), "missing required fields: name, message");
    }

    #[test]
    fn storage_error_names_the_path() {
        let err = SiteError::storage(
            "/srv/guestbook.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Storage Error (/srv/guestbook.txt): denied");
    }
}
