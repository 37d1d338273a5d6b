//! Roster CLI
//!
//! Interactive menu over a JSON-backed player roster.

use anyhow::{Context, Result};
use clap::Parser;
use gridiron_roster::{run_menu, Console, JsonFileStore, RosterManager};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage a football player roster from the console", long_about = None)]
struct Cli {
    /// JSON document the roster is saved to and loaded from
    #[arg(long, default_value = "players/players.json")]
    file: PathBuf,

    /// Load the document before showing the menu
    #[arg(long, default_value = "false")]
    load: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("roster file: {}", cli.file.display());

    let mut roster = RosterManager::new(JsonFileStore::new(&cli.file));
    if cli.load {
        match roster.load() {
            Ok(()) => println!("Loaded {} players from {}", roster.count_all(), cli.file.display()),
            Err(err) => eprintln!("Error reading from file: {}", err),
        }
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_menu(&mut roster, &mut console).context("console i/o failed")?;

    log::info!("roster closed with {} players in memory", roster.count_all());
    Ok(())
}
