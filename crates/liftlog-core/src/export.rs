//! CSV export of selected days.
//!
//! Read-only over the history: collects one row per logged set for each
//! requested date, in request order, and renders a fixed nine-column
//! comma-separated table. The column layout is pinned -- downstream
//! spreadsheets import by position.

use crate::error::{CoreError, Result};
use crate::model::History;

/// Header row of the exported table.
pub const CSV_HEADER: &str = "Date,Focus,Exercise,Set,Weight(kg),Reps,RPE,Notes,RestTime(s)";

/// Substituted for an empty focus text in exported rows.
pub const EMPTY_FOCUS_PLACEHOLDER: &str = "unspecified";

/// One exported table row, one per set entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub date: String,
    pub focus: String,
    pub name: String,
    pub set: u32,
    pub weight: String,
    pub reps: String,
    pub rpe: String,
    pub notes: String,
    pub rest_time: u32,
}

/// Result of an export: the data rows plus a suggested filename.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub filename: String,
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    /// Render the table as CSV text, header first.
    ///
    /// Reps and notes are free-text and get quoted unconditionally so
    /// embedded commas survive; the remaining columns never contain a
    /// separator.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                row.date,
                row.focus,
                row.name,
                row.set,
                row.weight,
                quote(&row.reps),
                row.rpe,
                quote(&row.notes),
                row.rest_time,
            ));
        }
        out
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Collect export rows for `dates`, in request order.
///
/// Dates with no record or an empty log contribute nothing. Requesting
/// zero dates is [`CoreError::NoDatesSelected`]; a selection that yields
/// zero rows is [`CoreError::EmptyExportSelection`].
pub fn export_rows(history: &History, dates: &[String]) -> Result<ExportTable> {
    if dates.is_empty() {
        return Err(CoreError::NoDatesSelected);
    }

    let mut rows = Vec::new();
    for date in dates {
        let Some(record) = history.get(date) else {
            continue;
        };
        let focus = if record.focus.is_empty() {
            EMPTY_FOCUS_PLACEHOLDER
        } else {
            &record.focus
        };
        for entry in &record.log {
            rows.push(ExportRow {
                date: date.clone(),
                focus: focus.to_string(),
                name: entry.name.clone(),
                set: entry.set,
                weight: entry.weight.clone(),
                reps: entry.reps.clone(),
                rpe: entry.rpe.clone(),
                notes: entry.notes.clone(),
                rest_time: entry.rest_time,
            });
        }
    }

    if rows.is_empty() {
        return Err(CoreError::EmptyExportSelection);
    }

    let filename = if dates.len() == 1 {
        format!("workout-log-{}.csv", dates[0])
    } else {
        "workout-log-multi-day.csv".to_string()
    };

    Ok(ExportTable { filename, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayRecord, SetEntry};

    fn history_with(date: &str, sets: usize) -> History {
        let mut record = DayRecord::default();
        for i in 0..sets {
            let mut entry = SetEntry::new("Barbell Row", None);
            entry.set = i as u32 + 1;
            entry.weight = "60".into();
            entry.reps = "8-10".into();
            entry.rpe = "7.5".into();
            entry.rest_time = 90;
            record.log.push(entry);
        }
        let mut history = History::new();
        history.insert(date.into(), record);
        history
    }

    #[test]
    fn one_header_plus_one_line_per_set() {
        let history = history_with("2025-03-14", 3);
        let table = export_rows(&history, &["2025-03-14".into()]).unwrap();
        let csv = table.to_csv();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), 9);
        }
    }

    #[test]
    fn reps_and_notes_are_quoted() {
        let mut history = history_with("2025-03-14", 1);
        history.get_mut("2025-03-14").unwrap().log[0].notes = "slow, paused".into();
        let table = export_rows(&history, &["2025-03-14".into()]).unwrap();
        let csv = table.to_csv();

        assert!(csv.contains("\"8-10\""));
        assert!(csv.contains("\"slow, paused\""));
    }

    #[test]
    fn empty_focus_gets_placeholder() {
        let history = history_with("2025-03-14", 1);
        let table = export_rows(&history, &["2025-03-14".into()]).unwrap();
        assert_eq!(table.rows[0].focus, EMPTY_FOCUS_PLACEHOLDER);
    }

    #[test]
    fn filename_for_single_and_multiple_dates() {
        let mut history = history_with("2025-03-14", 1);
        history.insert("2025-03-15".into(), history["2025-03-14"].clone());

        let single = export_rows(&history, &["2025-03-14".into()]).unwrap();
        assert_eq!(single.filename, "workout-log-2025-03-14.csv");

        let multi =
            export_rows(&history, &["2025-03-14".into(), "2025-03-15".into()]).unwrap();
        assert_eq!(multi.filename, "workout-log-multi-day.csv");
    }

    #[test]
    fn no_dates_selected_is_distinct_error() {
        let history = history_with("2025-03-14", 1);
        assert!(matches!(
            export_rows(&history, &[]),
            Err(CoreError::NoDatesSelected)
        ));
    }

    #[test]
    fn unknown_or_empty_dates_yield_empty_selection() {
        let mut history = history_with("2025-03-14", 1);
        history.insert("2025-03-16".into(), DayRecord::default());

        assert!(matches!(
            export_rows(&history, &["2999-01-01".into()]),
            Err(CoreError::EmptyExportSelection)
        ));
        assert!(matches!(
            export_rows(&history, &["2025-03-16".into()]),
            Err(CoreError::EmptyExportSelection)
        ));
    }

    #[test]
    fn empty_dates_are_skipped_alongside_full_ones() {
        let history = history_with("2025-03-14", 2);
        let table = export_rows(
            &history,
            &["2999-01-01".into(), "2025-03-14".into()],
        )
        .unwrap();
        assert_eq!(table.rows.len(), 2);
        // Two requested dates, so the multi-day name applies even though
        // one contributed nothing.
        assert_eq!(table.filename, "workout-log-multi-day.csv");
    }

    #[test]
    fn export_does_not_mutate_history() {
        let history = history_with("2025-03-14", 2);
        let before = history.clone();
        let _ = export_rows(&history, &["2025-03-14".into()]);
        assert_eq!(history, before);
    }
}
