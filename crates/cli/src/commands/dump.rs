//! Convert a character file between formats.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use status_content::{CharacterLoader, DataFormat};

use crate::config::CliConfig;

/// Convert a character file to another format
#[derive(Parser)]
pub struct Dump {
    /// Character file (.ron, .toml, .yaml or .yml)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Ron,
    Toml,
    Yaml,
}

impl From<OutputFormat> for DataFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Ron => DataFormat::Ron,
            OutputFormat::Toml => DataFormat::Toml,
            OutputFormat::Yaml => DataFormat::Yaml,
        }
    }
}

impl Dump {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut rng = config.rng();
        let character = super::load_character(&self.file, config, rng.as_mut())?;
        let text = CharacterLoader::dump(&character, self.format.into())?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, text)?;
                tracing::info!("wrote {}", path.display());
            }
            None => print!("{text}"),
        }
        Ok(())
    }
}
