//! # Liftlog Core Library
//!
//! Core business logic for liftlog, a single-user workout set logger.
//! All operations are available through [`WorkoutJournal`], with the CLI
//! binary being a thin presentation layer over this library.
//!
//! ## Architecture
//!
//! - **Journal**: the single owner of mutable state -- today's log, the
//!   day-keyed history, and the rest clock. Every mutation is written
//!   through to disk before the call returns
//! - **Rest clock**: a wall-clock-based count-up state machine that the
//!   caller ticks periodically; at most one interval runs process-wide
//! - **Storage**: one JSON document for the whole history, rewritten
//!   wholesale on save, loaded fail-soft
//! - **Export**: read-only CSV rendering of selected days
//!
//! ## Key Components
//!
//! - [`WorkoutJournal`]: command interface for the presentation layer
//! - [`RestClock`]: rest timer state machine
//! - [`HistoryFile`]: durable history storage
//! - [`export_rows`]: day-selection CSV export

pub mod error;
pub mod export;
pub mod journal;
pub mod model;
pub mod storage;
pub mod timer;

pub use error::{CoreError, Result, StorageError};
pub use export::{export_rows, ExportRow, ExportTable, CSV_HEADER, EMPTY_FOCUS_PLACEHOLDER};
pub use journal::WorkoutJournal;
pub use model::{today_key, CarryOver, DayRecord, History, SetEntry, SetField};
pub use storage::{ClockFile, HistoryFile};
pub use timer::{RestClock, RestTarget};
