// src/store.rs

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{Result, SiteError};
use crate::models::StoredEntry;
use crate::record;

/// Append-only text log holding serialized records.
pub trait FlatLog: Send + Sync {
    /// Appends one serialized record to the end of the log.
    fn append(&self, record: &str) -> Result<()>;

    /// Returns the whole log; a log that was never written reads as empty.
    fn read(&self) -> Result<String>;

    /// Human-readable location, for logs and CLI output.
    fn describe(&self) -> String;
}

/// File-backed log. Every operation holds the same lock.
pub struct FileLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the empty file if missing; returns whether it was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        let _guard = self.lock.lock();
        if self.path.exists() {
            return Ok(false);
        }
        self.ensure_parent()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SiteError::storage(&self.path, e))?;
        Ok(true)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SiteError::storage(parent, e))?;
            }
        }
        Ok(())
    }
}

impl FlatLog for FileLog {
    fn append(&self, record: &str) -> Result<()> {
        let _guard = self.lock.lock();
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SiteError::storage(&self.path, e))?;
        // One write per record so a record is never split around another.
        file.write_all(record.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| SiteError::storage(&self.path, e))
    }

    fn read(&self) -> Result<String> {
        let _guard = self.lock.lock();
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(SiteError::storage(&self.path, e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory log, used where no file should be touched.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryLog {
    buf: Mutex<String>,
}

#[cfg(test)]
impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl FlatLog for MemoryLog {
    fn append(&self, record: &str) -> Result<()> {
        self.buf.lock().push_str(record);
        Ok(())
    }

    fn read(&self) -> Result<String> {
        Ok(self.buf.lock().clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

/// Reads every guestbook entry, most recent first.
pub fn read_guestbook(log: &dyn FlatLog) -> Result<Vec<StoredEntry>> {
    let content = log.read()?;
    let mut entries = record::parse_guestbook(&content);
    entries.reverse();
    Ok(entries)
}

pub fn count_entries(log: &dyn FlatLog) -> Result<usize> {
    Ok(record::parse_guestbook(&log.read()?).len())
}
