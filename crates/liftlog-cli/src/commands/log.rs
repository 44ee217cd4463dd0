use clap::Subcommand;
use liftlog_core::WorkoutJournal;

#[derive(Subcommand)]
pub enum LogAction {
    /// List dates that have logged sets, most recent first
    Dates,
    /// Show one day's record
    Show {
        /// Date in YYYY-MM-DD form
        date: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let journal = WorkoutJournal::open()?;

    match action {
        LogAction::Dates => {
            let dates = journal.list_dates();
            if dates.is_empty() {
                println!("no history");
            }
            for date in dates {
                let focus = journal
                    .day_record(&date)
                    .map(|record| record.focus.clone())
                    .unwrap_or_default();
                if focus.is_empty() {
                    println!("{date}");
                } else {
                    println!("{date}  focus: {focus}");
                }
            }
        }
        LogAction::Show { date, json } => {
            chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| format!("invalid date '{date}' (expected YYYY-MM-DD)"))?;
            let Some(record) = journal.day_record(&date) else {
                println!("no record for {date}");
                return Ok(());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                if !record.focus.is_empty() {
                    println!("focus: {}", record.focus);
                }
                for entry in &record.log {
                    println!(
                        "{} set {}  weight={} reps={} rpe={} rest={}s",
                        entry.name, entry.set, entry.weight, entry.reps, entry.rpe, entry.rest_time
                    );
                }
            }
        }
    }
    Ok(())
}
