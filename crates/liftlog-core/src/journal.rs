//! The workout journal: single owner of all mutable state.
//!
//! `WorkoutJournal` holds the day-keyed history, today's date key, and
//! the rest clock, and exposes the command interface the presentation
//! layer calls into. Every mutator finishes with an explicit
//! write-through persist, so a reload at any point observes the last
//! completed operation.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::export::{self, ExportTable};
use crate::model::{today_key, CarryOver, DayRecord, History, SetEntry, SetField};
use crate::storage::{ClockFile, HistoryFile};
use crate::timer::{now_ms, RestClock, RestTarget};

pub struct WorkoutJournal {
    history: History,
    today: String,
    clock: RestClock,
    history_file: HistoryFile,
    clock_file: ClockFile,
}

impl WorkoutJournal {
    /// Open the journal against the default data directory, dated today.
    pub fn open() -> Result<Self> {
        Self::with_files(HistoryFile::open()?, ClockFile::open()?, today_key())
    }

    /// Open the journal against specific storage files and date key.
    pub fn with_files(
        history_file: HistoryFile,
        clock_file: ClockFile,
        today: String,
    ) -> Result<Self> {
        let history = history_file.load();
        let clock = clock_file.load();
        let mut journal = Self {
            history,
            today,
            clock,
            history_file,
            clock_file,
        };
        journal.reconcile_resting_flags();
        Ok(journal)
    }

    /// Clear `is_resting` on any entry the clock is not actually timing.
    /// Guards the one-running-timer invariant against a lost or stale
    /// clock sidecar.
    fn reconcile_resting_flags(&mut self) {
        let active = self.clock.active().cloned();
        for (date, record) in self.history.iter_mut() {
            for (index, entry) in record.log.iter_mut().enumerate() {
                let running = active
                    .as_ref()
                    .is_some_and(|t| t.date == *date && t.index == index);
                entry.is_resting = running;
            }
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn today(&self) -> &str {
        &self.today
    }

    /// Dates with at least one logged set, most recent first.
    pub fn list_dates(&self) -> Vec<String> {
        self.history
            .iter()
            .rev()
            .filter(|(_, record)| !record.log.is_empty())
            .map(|(date, _)| date.clone())
            .collect()
    }

    pub fn day_record(&self, date: &str) -> Option<&DayRecord> {
        self.history.get(date)
    }

    /// Today's log in insertion order. Empty if today has not been
    /// touched yet.
    pub fn today_log(&self) -> &[SetEntry] {
        self.history
            .get(&self.today)
            .map(|record| record.log.as_slice())
            .unwrap_or(&[])
    }

    pub fn focus(&self) -> &str {
        self.history
            .get(&self.today)
            .map(|record| record.focus.as_str())
            .unwrap_or("")
    }

    // ── Mutators (each one persists before returning) ────────────────

    pub fn set_focus(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_today().focus = text.into();
        self.persist()
    }

    /// Append a set to today's log. Returns its index.
    pub fn add_set(&mut self, name: impl Into<String>, carry: Option<CarryOver>) -> Result<usize> {
        let entry = SetEntry::new(name, carry);
        let log = &mut self.ensure_today().log;
        log.push(entry);
        let index = log.len() - 1;
        self.persist()?;
        Ok(index)
    }

    /// Update one editable field of the entry at `index`.
    pub fn edit_field(&mut self, index: usize, field: SetField, value: impl Into<String>) -> Result<()> {
        let entry = self.entry_mut(index)?;
        let value = value.into();
        match field {
            SetField::Weight => entry.weight = value,
            SetField::Reps => entry.reps = value,
            SetField::Rpe => entry.rpe = value,
            SetField::Notes => entry.notes = value,
        }
        self.persist()
    }

    /// Remove the entry at `index`. Later entries shift down one
    /// position; their set ordinals are not renumbered. Any rest
    /// interval on the removed entry stops first.
    pub fn remove_set(&mut self, index: usize) -> Result<SetEntry> {
        self.check_index(index)?;
        let today = self.today.clone();
        self.clock.on_entry_removed(&today, index);
        let removed = self.ensure_today().log.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Start timing rest for the entry at `index`. Any interval running
    /// elsewhere in the store is forced idle first, credited with the
    /// seconds elapsed up to this moment; the target restarts from zero.
    pub fn start_rest(&mut self, index: usize) -> Result<()> {
        self.start_rest_at(now_ms(), index)
    }

    pub fn start_rest_at(&mut self, now_ms: u64, index: usize) -> Result<()> {
        self.check_index(index)?;
        // The preempted entry retains everything it accumulated up to
        // the moment of the switch.
        self.fold_elapsed_at(now_ms);
        let target = RestTarget {
            date: self.today.clone(),
            index,
        };
        if let Some(prev) = self.clock.start_at(now_ms, target) {
            if let Some(entry) = self.entry_at_mut(&prev) {
                entry.is_resting = false;
            }
            debug!(date = %prev.date, index = prev.index, "preempted running rest interval");
        }
        let entry = self.entry_mut(index)?;
        entry.rest_time = 0;
        entry.is_resting = true;
        self.persist()
    }

    /// Stop timing rest for the entry at `index`, crediting the seconds
    /// elapsed since the last tick and keeping the recorded total.
    /// Idempotent on an already-idle entry.
    pub fn stop_rest(&mut self, index: usize) -> Result<()> {
        self.stop_rest_at(now_ms(), index)
    }

    pub fn stop_rest_at(&mut self, now_ms: u64, index: usize) -> Result<()> {
        self.check_index(index)?;
        let target = RestTarget {
            date: self.today.clone(),
            index,
        };
        if self.clock.is_running(&target) {
            self.fold_elapsed_at(now_ms);
        }
        let was_running = self.clock.stop(&target).is_some();
        let entry = self.entry_mut(index)?;
        if !was_running && !entry.is_resting {
            return Ok(());
        }
        entry.is_resting = false;
        self.persist()
    }

    /// Fold elapsed wall-clock time into the running interval. Call at a
    /// 1 s cadence (or whenever progress should be observed). Returns
    /// the updated rest time when something changed.
    pub fn tick(&mut self) -> Result<Option<u32>> {
        self.tick_at(now_ms())
    }

    pub fn tick_at(&mut self, now_ms: u64) -> Result<Option<u32>> {
        if self.clock.active().is_none() {
            return Ok(None);
        }
        let updated = self.fold_elapsed_at(now_ms);
        self.persist()?;
        Ok(updated)
    }

    // ── Export (read-only) ───────────────────────────────────────────

    pub fn export_rows(&self, dates: &[String]) -> Result<ExportTable> {
        export::export_rows(&self.history, dates)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn ensure_today(&mut self) -> &mut DayRecord {
        self.history.entry(self.today.clone()).or_default()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.today_log().len();
        if index < len {
            Ok(())
        } else {
            Err(CoreError::InvalidIndex { index, len })
        }
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut SetEntry> {
        let len = self.today_log().len();
        let today = self.today.clone();
        self.history
            .get_mut(&today)
            .and_then(|record| record.log.get_mut(index))
            .ok_or(CoreError::InvalidIndex { index, len })
    }

    fn entry_at_mut(&mut self, target: &RestTarget) -> Option<&mut SetEntry> {
        self.history.get_mut(&target.date)?.log.get_mut(target.index)
    }

    /// Credit the running interval with whole seconds elapsed up to
    /// `now_ms`. Returns the entry's updated rest time when it advanced.
    fn fold_elapsed_at(&mut self, now_ms: u64) -> Option<u32> {
        let (target, secs) = self.clock.tick_at(now_ms)?;
        match self.entry_at_mut(&target) {
            Some(entry) => {
                entry.rest_time += secs;
                Some(entry.rest_time)
            }
            None => {
                // Entry vanished under the clock; drop the interval.
                self.clock.stop_any();
                None
            }
        }
    }

    fn persist(&self) -> Result<()> {
        self.history_file.save(&self.history)?;
        self.clock_file.save(&self.clock)?;
        Ok(())
    }
}
