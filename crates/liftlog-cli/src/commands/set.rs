use std::io::Write;

use clap::Subcommand;
use liftlog_core::{CarryOver, SetEntry, SetField, WorkoutJournal};

#[derive(Subcommand)]
pub enum SetAction {
    /// Append a new set of an exercise to today's log
    Add {
        /// Exercise name
        name: String,
    },
    /// Duplicate the set at INDEX as the next set (carries weight and
    /// RPE, increments the set number; reps and notes start empty)
    Dup {
        /// Position in today's log (0-based)
        index: usize,
    },
    /// Edit one field of a logged set
    Edit {
        /// Position in today's log (0-based)
        index: usize,
        /// Field to edit: weight, reps, rpe or notes
        field: SetField,
        /// New value
        value: String,
    },
    /// Remove a set from today's log
    Remove {
        /// Position in today's log (0-based)
        index: usize,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print today's log
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut journal = WorkoutJournal::open()?;

    match action {
        SetAction::Add { name } => {
            let index = journal.add_set(name, None)?;
            print_entry(index, &journal.today_log()[index]);
        }
        SetAction::Dup { index } => {
            let source = journal
                .today_log()
                .get(index)
                .ok_or_else(|| format!("no set at index {index}"))?;
            let name = source.name.clone();
            // The core copies the carry-over ordinal verbatim; bumping it
            // for "next set" entry happens here at the call site.
            let mut carry = CarryOver::from_entry(source);
            carry.set += 1;
            let new_index = journal.add_set(name, Some(carry))?;
            print_entry(new_index, &journal.today_log()[new_index]);
        }
        SetAction::Edit { index, field, value } => {
            journal.edit_field(index, field, value)?;
            print_entry(index, &journal.today_log()[index]);
        }
        SetAction::Remove { index, yes } => {
            let entry = journal
                .today_log()
                .get(index)
                .ok_or_else(|| format!("no set at index {index}"))?;
            let skip_prompt = yes || !crate::config::Config::load()?.confirm_removals;
            if !skip_prompt && !confirm(&format!("remove set {} of {}?", entry.set, entry.name))? {
                println!("aborted");
                return Ok(());
            }
            let removed = journal.remove_set(index)?;
            println!("removed set {} of {}", removed.set, removed.name);
        }
        SetAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(journal.today_log())?);
            } else if journal.today_log().is_empty() {
                println!("no sets logged today");
            } else {
                for (index, entry) in journal.today_log().iter().enumerate() {
                    print_entry(index, entry);
                }
            }
        }
    }
    Ok(())
}

fn print_entry(index: usize, entry: &SetEntry) {
    let rest = if entry.is_resting {
        format!("{}s (resting)", entry.rest_time)
    } else if entry.rest_time > 0 {
        format!("{}s", entry.rest_time)
    } else {
        "--".to_string()
    };
    println!(
        "[{index}] {} set {}  weight={} reps={} rpe={} notes={} rest={rest}",
        entry.name,
        entry.set,
        dash_if_empty(&entry.weight),
        dash_if_empty(&entry.reps),
        dash_if_empty(&entry.rpe),
        dash_if_empty(&entry.notes),
    );
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() {
        "--"
    } else {
        value
    }
}

fn confirm(prompt: &str) -> Result<bool, std::io::Error> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
