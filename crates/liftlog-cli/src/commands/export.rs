use std::path::PathBuf;

use clap::Args;
use liftlog_core::WorkoutJournal;

#[derive(Args)]
pub struct ExportArgs {
    /// Dates to export, YYYY-MM-DD each
    pub dates: Vec<String>,
    /// Include today in the selection
    #[arg(long)]
    pub today: bool,
    /// Output path (defaults to the suggested filename in the current
    /// directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut dates = args.dates;
    for date in &dates {
        chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{date}' (expected YYYY-MM-DD)"))?;
    }

    let journal = WorkoutJournal::open()?;
    if args.today {
        dates.push(journal.today().to_string());
    }
    let table = journal.export_rows(&dates)?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&table.filename));
    std::fs::write(&path, table.to_csv())?;
    println!("wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}
