//! `rpg-status`: inspect and progress character files from the terminal.
//!
//! Run with: `rpg-status <command>`

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Dump, Gain, LevelUp, Lookup, Show};
use config::CliConfig;

/// Character status tools
#[derive(Parser)]
#[command(name = "rpg-status")]
#[command(about = "Inspect and progress RPG character files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print a character's records and derived stats
    Show(Show),

    /// Level a character up
    LevelUp(LevelUp),

    /// Grant experience on a progression track
    Gain(Gain),

    /// Convert a character file to another format
    Dump(Dump),

    /// Look an entry up in the race, item, magic or skill registry
    Lookup(Lookup),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RPG_STATUS_DATA_DIR and friends)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Show(cmd) => cmd.execute(&config),
        Command::LevelUp(cmd) => cmd.execute(&config),
        Command::Gain(cmd) => cmd.execute(&config),
        Command::Dump(cmd) => cmd.execute(&config),
        Command::Lookup(cmd) => cmd.execute(&config),
    }
}
