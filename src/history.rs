//! Session history of accepted passwords.
//!
//! The history lives in a [`SessionStore`] handed to the tracker, one store
//! per session. Nothing is shared across sessions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Maximum number of distinct passwords kept.
pub const HISTORY_CAPACITY: usize = 10;

/// Key under which the tracker keeps its list in the session store.
pub const HISTORY_KEY: &str = "Passwords";

pub const EXPORT_FILE_NAME: &str = "password_history.txt";
pub const EXPORT_MIME: &str = "text/plain";

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Export directory not found: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to write history export: {0}")]
    Io(#[from] std::io::Error),
}

/// Keyed session storage with list values.
pub trait SessionStore {
    /// Returns the list stored under `key`, if any.
    fn list(&self, key: &str) -> Option<&[String]>;

    /// Returns the list stored under `key`, inserting an empty one first if absent.
    fn list_mut(&mut self, key: &str) -> &mut Vec<String>;
}

/// In-memory session store, created empty at session start.
#[derive(Debug, Default, Clone)]
pub struct MemorySession {
    lists: HashMap<String, Vec<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn list(&self, key: &str) -> Option<&[String]> {
        self.lists.get(key).map(Vec::as_slice)
    }

    fn list_mut(&mut self, key: &str) -> &mut Vec<String> {
        self.lists.entry(key.to_string()).or_default()
    }
}

/// What [`HistoryTracker::record`] did with a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Added,
    /// Added, and the oldest entry was evicted to stay within capacity.
    AddedEvicting(String),
    /// Already present; the store is unchanged.
    Duplicate,
    /// Contains a line separator and would break the export; the store is unchanged.
    Unexportable,
}

impl RecordOutcome {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, RecordOutcome::Duplicate)
    }

    /// Notice a host shows for this outcome, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RecordOutcome::Duplicate => {
                Some("Warning: You have already checked this password before.")
            }
            RecordOutcome::Unexportable => {
                Some("Warning: Passwords containing line breaks are not kept in the history.")
            }
            _ => None,
        }
    }
}

/// A downloadable copy of the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub content: String,
}

impl HistoryExport {
    /// Writes the artifact as `dir/password_history.txt`.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, HistoryError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            #[cfg(feature = "tracing")]
            tracing::error!("History export FAILED: not a directory {:?}", dir);
            return Err(HistoryError::NotADirectory(dir.to_path_buf()));
        }

        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.content)?;

        #[cfg(feature = "tracing")]
        tracing::info!("History exported to {:?}", path);

        Ok(path)
    }
}

/// Bounded, deduplicated history of fully-passing passwords.
///
/// Entries are kept oldest first. Callers record a password only after its
/// verdict passed.
#[derive(Debug, Default)]
pub struct HistoryTracker<S: SessionStore = MemorySession> {
    store: S,
}

impl<S: SessionStore> HistoryTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn entries(&self) -> &[String] {
        self.store.list(HISTORY_KEY).unwrap_or(&[])
    }

    /// Records `password` as the most recent entry.
    ///
    /// A password already present leaves the store untouched and yields
    /// [`RecordOutcome::Duplicate`]. Past [`HISTORY_CAPACITY`] the oldest
    /// entry is evicted. Passwords containing `\n` are refused with
    /// [`RecordOutcome::Unexportable`] so that [`export`](Self::export) stays
    /// one entry per line.
    pub fn record(&mut self, password: &str) -> RecordOutcome {
        if password.contains('\n') {
            #[cfg(feature = "tracing")]
            tracing::warn!("Refusing history entry containing a line break");
            return RecordOutcome::Unexportable;
        }

        let list = self.store.list_mut(HISTORY_KEY);

        if list.iter().any(|p| p == password) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password already present in history");
            return RecordOutcome::Duplicate;
        }

        list.push(password.to_string());

        if list.len() > HISTORY_CAPACITY {
            let evicted = list.remove(0);
            #[cfg(feature = "tracing")]
            tracing::info!(size = list.len(), "History entry added, oldest evicted");
            return RecordOutcome::AddedEvicting(evicted);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(size = list.len(), "History entry added");

        RecordOutcome::Added
    }

    /// Returns the entries, most recent first.
    pub fn list_recent(&self) -> Vec<String> {
        self.entries().iter().rev().cloned().collect()
    }

    /// Returns display lines for [`list_recent`](Self::list_recent), with a 1-based index.
    pub fn render_recent(&self) -> Vec<String> {
        self.entries()
            .iter()
            .rev()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, p))
            .collect()
    }

    /// Joins the entries in insertion order, one per line.
    pub fn export(&self) -> String {
        self.entries().join("\n")
    }

    pub fn export_artifact(&self) -> HistoryExport {
        HistoryExport {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            content: self.export(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
