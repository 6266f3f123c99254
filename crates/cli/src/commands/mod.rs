//! Command implementations for rpg-status
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod dump;
mod gain;
mod level_up;
mod lookup;
mod show;

pub use dump::Dump;
pub use gain::Gain;
pub use level_up::LevelUp;
pub use lookup::Lookup;
pub use show::Show;

use std::path::Path;

use anyhow::Result;
use status_content::CharacterLoader;
use status_core::{Character, Progress, RngOracle, Track};

use crate::config::CliConfig;

fn load_character(path: &Path, config: &CliConfig, rng: &mut dyn RngOracle) -> Result<Character> {
    let status = config.status_config()?;
    CharacterLoader::load(path, status, rng)
}

/// Saves `character` back to `path` when `write` is set.
fn persist(path: &Path, character: &Character, write: bool) -> Result<()> {
    if write {
        CharacterLoader::save(path, character)?;
        tracing::info!("saved {}", path.display());
    }
    Ok(())
}

fn report_progress(character: &Character, track: Track, progress: Progress) {
    match progress {
        Progress::Frozen => println!("character is frozen, nothing changed"),
        Progress::Applied { levels_gained } => println!(
            "{track}: +{levels_gained} level(s), now level {} with {} EXP (next at {})",
            character.track_level(track),
            character.track_experience(track),
            character.threshold(track),
        ),
    }
}
