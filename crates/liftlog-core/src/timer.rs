//! Rest timer state machine.
//!
//! A count-up clock for the rest interval after a set. Wall-clock based
//! with no internal thread: the caller invokes `tick()` periodically and
//! elapsed whole seconds are folded into the owning entry's rest time.
//!
//! At most one rest interval runs process-wide. The clock holds a single
//! optional handle, so starting a new interval structurally cancels the
//! previous one -- there is never a second tick source to race against.
//!
//! ## State transitions (per entry)
//!
//! ```text
//! Idle -> Running -> Idle
//! ```
//!
//! `start` preempts whichever entry was running (its accumulated seconds
//! are retained) and resets the target's count to zero. `stop` on an idle
//! clock is a no-op.

use serde::{Deserialize, Serialize};

/// Position of a set entry within the history: date key plus index into
/// that day's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestTarget {
    pub date: String,
    pub index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActiveRest {
    target: RestTarget,
    /// Epoch ms of the last tick that was folded into `rest_time`.
    /// Sub-second remainders stay in the anchor, so no second is lost
    /// or double-counted across ticks.
    last_tick_epoch_ms: u64,
}

/// The process-wide rest clock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestClock {
    #[serde(default)]
    active: Option<ActiveRest>,
}

impl RestClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The position currently being timed, if any.
    pub fn active(&self) -> Option<&RestTarget> {
        self.active.as_ref().map(|a| &a.target)
    }

    pub fn is_running(&self, target: &RestTarget) -> bool {
        self.active() == Some(target)
    }

    /// Begin timing `target`. Returns the position that was preempted,
    /// if a different interval was running.
    pub fn start(&mut self, target: RestTarget) -> Option<RestTarget> {
        self.start_at(now_ms(), target)
    }

    pub fn start_at(&mut self, now_ms: u64, target: RestTarget) -> Option<RestTarget> {
        let preempted = self
            .active
            .take()
            .map(|a| a.target)
            .filter(|prev| *prev != target);
        self.active = Some(ActiveRest {
            target,
            last_tick_epoch_ms: now_ms,
        });
        preempted
    }

    /// Fold elapsed wall-clock time into the running interval. Returns
    /// the target and the number of whole seconds to add to its rest
    /// time, or `None` when idle or less than a second has passed.
    pub fn tick_at(&mut self, now_ms: u64) -> Option<(RestTarget, u32)> {
        let active = self.active.as_mut()?;
        let elapsed_ms = now_ms.saturating_sub(active.last_tick_epoch_ms);
        let secs = elapsed_ms / 1000;
        if secs == 0 {
            return None;
        }
        // Keep the sub-second remainder in the anchor.
        active.last_tick_epoch_ms += secs * 1000;
        Some((active.target.clone(), secs as u32))
    }

    /// Stop timing. Idempotent: stopping an idle clock, or a position
    /// that is not the running one, changes nothing. Returns the stopped
    /// position.
    pub fn stop(&mut self, target: &RestTarget) -> Option<RestTarget> {
        if self.is_running(target) {
            self.active.take().map(|a| a.target)
        } else {
            None
        }
    }

    /// Stop whatever is running, returning its position.
    pub fn stop_any(&mut self) -> Option<RestTarget> {
        self.active.take().map(|a| a.target)
    }

    /// Adjust the clock after `removed_index` is deleted from `date`'s
    /// log. The removed position's own interval stops; intervals after
    /// it shift down with their entry.
    pub fn on_entry_removed(&mut self, date: &str, removed_index: usize) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.target.date != date {
            return;
        }
        if active.target.index == removed_index {
            self.active = None;
        } else if active.target.index > removed_index {
            active.target.index -= 1;
        }
    }
}

pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(index: usize) -> RestTarget {
        RestTarget {
            date: "2025-03-14".into(),
            index,
        }
    }

    #[test]
    fn start_then_ticks_accumulate_whole_seconds() {
        let mut clock = RestClock::new();
        clock.start_at(1_000, target(0));

        assert_eq!(clock.tick_at(1_500), None);
        assert_eq!(clock.tick_at(2_000), Some((target(0), 1)));
        assert_eq!(clock.tick_at(4_700), Some((target(0), 2)));
        // Remainder of 700 ms carries into the next tick.
        assert_eq!(clock.tick_at(5_000), Some((target(0), 1)));
    }

    #[test]
    fn start_preempts_previous_interval() {
        let mut clock = RestClock::new();
        clock.start_at(0, target(0));
        let preempted = clock.start_at(5_000, target(1));

        assert_eq!(preempted, Some(target(0)));
        assert!(clock.is_running(&target(1)));
        assert!(!clock.is_running(&target(0)));
    }

    #[test]
    fn restarting_same_target_preempts_nothing() {
        let mut clock = RestClock::new();
        clock.start_at(0, target(0));
        assert_eq!(clock.start_at(5_000, target(0)), None);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = RestClock::new();
        clock.start_at(0, target(0));

        assert_eq!(clock.stop(&target(0)), Some(target(0)));
        assert_eq!(clock.stop(&target(0)), None);
        assert_eq!(clock.tick_at(10_000), None);
    }

    #[test]
    fn stop_on_other_target_changes_nothing() {
        let mut clock = RestClock::new();
        clock.start_at(0, target(0));

        assert_eq!(clock.stop(&target(1)), None);
        assert!(clock.is_running(&target(0)));
    }

    #[test]
    fn removal_stops_own_interval_and_shifts_later_ones() {
        let mut clock = RestClock::new();

        clock.start_at(0, target(2));
        clock.on_entry_removed("2025-03-14", 2);
        assert_eq!(clock.active(), None);

        clock.start_at(0, target(2));
        clock.on_entry_removed("2025-03-14", 0);
        assert_eq!(clock.active(), Some(&target(1)));

        clock.on_entry_removed("2999-01-01", 0);
        assert_eq!(clock.active(), Some(&target(1)));
    }
}
