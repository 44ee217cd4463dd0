use std::time::Duration;

use clap::Subcommand;
use liftlog_core::WorkoutJournal;

#[derive(Subcommand)]
pub enum RestAction {
    /// Start timing rest for a set (stops any other running timer)
    Start {
        /// Position in today's log (0-based)
        index: usize,
    },
    /// Stop timing rest for a set, keeping the recorded seconds
    Stop {
        /// Position in today's log (0-based)
        index: usize,
    },
    /// Print the running rest interval, if any
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tick the running rest interval in the foreground until it is
    /// stopped elsewhere or interrupted
    Watch,
}

pub fn run(action: RestAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut journal = WorkoutJournal::open()?;

    match action {
        RestAction::Start { index } => {
            journal.start_rest(index)?;
            let entry = &journal.today_log()[index];
            println!("resting after {} set {}", entry.name, entry.set);
        }
        RestAction::Stop { index } => {
            journal.stop_rest(index)?;
            let entry = &journal.today_log()[index];
            println!("rested {}s after {} set {}", entry.rest_time, entry.name, entry.set);
        }
        RestAction::Status { json } => {
            journal.tick()?;
            match resting_entry(&journal) {
                Some((index, name, set, rest_time)) => {
                    if json {
                        println!(
                            "{}",
                            serde_json::json!({
                                "index": index,
                                "name": name,
                                "set": set,
                                "restTime": rest_time,
                            })
                        );
                    } else {
                        println!("[{index}] {name} set {set}: {rest_time}s");
                    }
                }
                None => {
                    if json {
                        println!("null");
                    } else {
                        println!("no rest timer running");
                    }
                }
            }
        }
        RestAction::Watch => loop {
            journal.tick()?;
            let Some((index, name, set, rest_time)) = resting_entry(&journal) else {
                println!("no rest timer running");
                break;
            };
            println!("[{index}] {name} set {set}: {rest_time}s");
            std::thread::sleep(Duration::from_secs(1));
        },
    }
    Ok(())
}

fn resting_entry(journal: &WorkoutJournal) -> Option<(usize, String, u32, u32)> {
    journal
        .today_log()
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.is_resting)
        .map(|(index, entry)| (index, entry.name.clone(), entry.set, entry.rest_time))
}
