//! Grant experience and apply any resulting level-ups.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use status_core::Track;

use crate::config::CliConfig;

/// Grant experience on a progression track
#[derive(Parser)]
pub struct Gain {
    /// Character file (.ron, .toml, .yaml or .yml)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Experience to add
    #[arg(value_name = "AMOUNT")]
    amount: u32,

    /// Progression track: general, magical or magical_skill
    #[arg(short, long, default_value = "general")]
    track: String,

    /// Write the result back to FILE
    #[arg(short, long)]
    write: bool,
}

impl Gain {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let track: Track = self.track.parse()?;

        let mut rng = config.rng();
        let mut character = super::load_character(&self.file, config, rng.as_mut())?;

        let progress = character.gain_track_experience(track, self.amount, rng.as_mut());
        super::report_progress(&character, track, progress);
        super::persist(&self.file, &character, self.write)
    }
}
