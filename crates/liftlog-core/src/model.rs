//! Data model for the workout history.
//!
//! Field names serialize in camelCase so the durable JSON document keeps
//! the layout other tooling already reads:
//!
//! ```json
//! {
//!   "2025-03-14": {
//!     "focus": "push day",
//!     "log": [
//!       { "name": "Barbell Bench Press", "set": 1, "weight": "80",
//!         "reps": "8-10", "rpe": "8", "notes": "",
//!         "restTime": 90, "isResting": false }
//!     ]
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One performed set of one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    /// Exercise name. Opaque to the core -- the catalog lives in the
    /// presentation layer.
    pub name: String,
    /// User-visible set ordinal within the day. Not unique and never
    /// renumbered after removals.
    pub set: u32,
    /// Weight as entered, numeric-or-empty.
    #[serde(default)]
    pub weight: String,
    /// Rep count or range ("8-10"), may be empty.
    #[serde(default)]
    pub reps: String,
    /// Rate of perceived exertion, numeric-or-empty.
    #[serde(default)]
    pub rpe: String,
    #[serde(default)]
    pub notes: String,
    /// Seconds of rest recorded for this set, 0 if never timed.
    #[serde(default)]
    pub rest_time: u32,
    /// True only while this set's rest timer is running.
    #[serde(default)]
    pub is_resting: bool,
}

impl SetEntry {
    /// A fresh first set of `name`, or a quick-entry duplicate when a
    /// carry-over payload is supplied. Reps and notes never carry over,
    /// and the rest timer state always starts cleared.
    pub fn new(name: impl Into<String>, carry: Option<CarryOver>) -> Self {
        let carry = carry.unwrap_or(CarryOver {
            set: 1,
            weight: String::new(),
            rpe: String::new(),
        });
        Self {
            name: name.into(),
            set: carry.set,
            weight: carry.weight,
            reps: String::new(),
            rpe: carry.rpe,
            notes: String::new(),
            rest_time: 0,
            is_resting: false,
        }
    }
}

/// Fields of a [`SetEntry`] that are editable in place after logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetField {
    Weight,
    Reps,
    Rpe,
    Notes,
}

impl std::str::FromStr for SetField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(Self::Weight),
            "reps" => Ok(Self::Reps),
            "rpe" => Ok(Self::Rpe),
            "notes" => Ok(Self::Notes),
            other => Err(format!("unknown field '{other}' (expected weight, reps, rpe or notes)")),
        }
    }
}

impl std::fmt::Display for SetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Weight => "weight",
            Self::Reps => "reps",
            Self::Rpe => "rpe",
            Self::Notes => "notes",
        };
        f.write_str(name)
    }
}

/// Defaults pre-filled into a duplicated set for faster entry.
///
/// The core copies `set` verbatim; incrementing the ordinal when
/// duplicating "as next set" is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct CarryOver {
    pub set: u32,
    pub weight: String,
    pub rpe: String,
}

impl CarryOver {
    /// Carry-over payload from an existing entry, ordinal copied as-is.
    pub fn from_entry(entry: &SetEntry) -> Self {
        Self {
            set: entry.set,
            weight: entry.weight.clone(),
            rpe: entry.rpe.clone(),
        }
    }
}

/// All logged data for one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub log: Vec<SetEntry>,
}

/// Day-keyed workout history. ISO `YYYY-MM-DD` keys sort
/// lexicographically in date order, so the map's ordering is
/// chronological for free.
pub type History = BTreeMap<String, DayRecord>;

/// Today's history key in the local timezone.
pub fn today_key() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_defaults() {
        let entry = SetEntry::new("Barbell Squat", None);
        assert_eq!(entry.set, 1);
        assert_eq!(entry.rest_time, 0);
        assert!(!entry.is_resting);
        assert!(entry.weight.is_empty());
    }

    #[test]
    fn carry_over_skips_reps_and_notes() {
        let mut prev = SetEntry::new("Barbell Squat", None);
        prev.set = 2;
        prev.weight = "100".into();
        prev.reps = "5".into();
        prev.rpe = "8".into();
        prev.notes = "belt on".into();
        prev.rest_time = 120;

        let next = SetEntry::new("Barbell Squat", Some(CarryOver::from_entry(&prev)));
        assert_eq!(next.set, 2);
        assert_eq!(next.weight, "100");
        assert_eq!(next.rpe, "8");
        assert!(next.reps.is_empty());
        assert!(next.notes.is_empty());
        assert_eq!(next.rest_time, 0);
        assert!(!next.is_resting);
    }

    #[test]
    fn entry_serializes_with_camel_case_keys() {
        let entry = SetEntry::new("Pull-Up", None);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("restTime").is_some());
        assert!(json.get("isResting").is_some());
        assert!(json.get("rest_time").is_none());
    }

    #[test]
    fn day_record_tolerates_missing_fields() {
        let record: DayRecord = serde_json::from_str(r#"{"focus": "legs"}"#).unwrap();
        assert_eq!(record.focus, "legs");
        assert!(record.log.is_empty());
    }
}
