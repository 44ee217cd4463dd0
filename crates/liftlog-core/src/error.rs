//! Core error types for liftlog-core.
//!
//! Everything here is recoverable. Corrupt durable state is not an error
//! at all: loading falls back to an empty history (see [`crate::storage`]).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for liftlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A mutator was called with a position outside the current log.
    /// The log is left untouched.
    #[error("set index {index} out of range for today's log (length: {len})")]
    InvalidIndex { index: usize, len: usize },

    /// Export was invoked without choosing any dates.
    #[error("no dates selected for export")]
    NoDatesSelected,

    /// None of the requested dates have any logged sets.
    #[error("nothing to export: the selected dates have no logged sets")]
    EmptyExportSelection,

    /// Writing durable state failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Failures while writing state to disk. Read failures never surface
/// here -- they reset to defaults instead.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve data directory: {0}")]
    DataDir(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
