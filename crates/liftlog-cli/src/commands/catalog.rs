use clap::Subcommand;

use crate::config::Config;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List catalog exercises, optionally filtered by body-part tag
    List {
        /// Only exercises tagged with this body part
        #[arg(long)]
        tag: Option<String>,
    },
    /// List the body-part tags used in the catalog
    Tags,
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        CatalogAction::List { tag } => {
            let entries = config
                .catalog
                .iter()
                .filter(|entry| tag.as_ref().map_or(true, |t| entry.tags.contains(t)));
            let mut any = false;
            for entry in entries {
                any = true;
                println!("{}  [{}]", entry.name, entry.tags.join(", "));
            }
            if !any {
                println!("no exercises match");
            }
        }
        CatalogAction::Tags => {
            for tag in config.tags() {
                println!("{tag}");
            }
        }
    }
    Ok(())
}
