//! Durable storage for the workout history.
//!
//! The whole history lives in one JSON document, rewritten wholesale on
//! every save (write-through, no batching). Loading fails soft: a missing
//! or unparseable file yields an empty history rather than an error, so a
//! corrupted document can never take the application down.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{Result, StorageError};
use crate::model::History;

use super::data_dir;

/// File-backed store for the day-keyed [`History`].
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    /// Open the history store in the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join("history.json"),
        })
    }

    /// Open a history store at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the history from disk.
    ///
    /// Never fails: an absent file is an empty history, and an unreadable
    /// or unparseable one resets to empty with a warning.
    pub fn load(&self) -> History {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = %self.path.display(), "no history file, starting empty");
                return History::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(history) => history,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history file unreadable, resetting to empty");
                History::new()
            }
        }
    }

    /// Write the entire history to disk, replacing prior content.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, history: &History) -> Result<()> {
        let content = serde_json::to_string_pretty(history).map_err(StorageError::Json)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), days = history.len(), "history saved");
        Ok(())
    }
}
