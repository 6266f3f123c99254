//! Level a character up a fixed number of times.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use status_core::{Progress, Track};

use crate::config::CliConfig;

/// Level a character up
#[derive(Parser)]
pub struct LevelUp {
    /// Character file (.ron, .toml, .yaml or .yml)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Number of levels to gain
    #[arg(short = 'n', long, default_value_t = 1)]
    times: u32,

    /// Write the result back to FILE
    #[arg(short, long)]
    write: bool,
}

impl LevelUp {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut rng = config.rng();
        let mut character = super::load_character(&self.file, config, rng.as_mut())?;

        let mut gained = 0;
        for _ in 0..self.times {
            match character.level_up(rng.as_mut()) {
                Progress::Applied { levels_gained } => gained += levels_gained,
                Progress::Frozen => break,
            }
        }

        let progress = if character.is_frozen() {
            Progress::Frozen
        } else {
            Progress::Applied {
                levels_gained: gained,
            }
        };
        super::report_progress(&character, Track::General, progress);
        super::persist(&self.file, &character, self.write)
    }
}
