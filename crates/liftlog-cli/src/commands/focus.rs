use clap::Subcommand;
use liftlog_core::WorkoutJournal;

#[derive(Subcommand)]
pub enum FocusAction {
    /// Print today's focus text
    Show,
    /// Set today's focus text
    Set {
        /// Focus text, e.g. "push day"
        text: String,
    },
}

pub fn run(action: FocusAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FocusAction::Show => {
            let journal = WorkoutJournal::open()?;
            println!("{}", journal.focus());
        }
        FocusAction::Set { text } => {
            let mut journal = WorkoutJournal::open()?;
            journal.set_focus(text)?;
            println!("ok");
        }
    }
    Ok(())
}
