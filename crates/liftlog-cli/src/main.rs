use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "liftlog", version, about = "Workout set logger")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's training focus
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Log and edit today's sets
    Set {
        #[command(subcommand)]
        action: commands::set::SetAction,
    },
    /// Rest timer control
    Rest {
        #[command(subcommand)]
        action: commands::rest::RestAction,
    },
    /// Browse the workout history
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Export selected days to CSV
    Export(commands::export::ExportArgs),
    /// Exercise catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Focus { action } => commands::focus::run(action),
        Commands::Set { action } => commands::set::run(action),
        Commands::Rest { action } => commands::rest::run(action),
        Commands::Log { action } => commands::log::run(action),
        Commands::Export(args) => commands::export::run(args),
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
