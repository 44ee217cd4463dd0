//! Sidecar storage for the rest clock.
//!
//! The durable history document holds each entry's `restTime` and
//! `isResting` flags but not the wall-clock anchor of a running interval,
//! so the clock persists separately. Losing this file only loses an
//! in-flight rest interval, never logged data.

use std::path::PathBuf;

use tracing::warn;

use crate::error::{Result, StorageError};
use crate::timer::RestClock;

use super::data_dir;

/// File-backed store for the [`RestClock`].
pub struct ClockFile {
    path: PathBuf,
}

impl ClockFile {
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join("rest_clock.json"),
        })
    }

    /// Open a clock store at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the clock state, falling back to an idle clock when the file
    /// is absent or unreadable.
    pub fn load(&self) -> RestClock {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return RestClock::new();
        };
        match serde_json::from_str(&content) {
            Ok(clock) => clock,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "rest clock file unreadable, resetting");
                RestClock::new()
            }
        }
    }

    pub fn save(&self, clock: &RestClock) -> Result<()> {
        let content = serde_json::to_string(clock).map_err(StorageError::Json)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
