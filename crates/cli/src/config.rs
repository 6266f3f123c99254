//! Environment-driven configuration for the command-line tool.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use status_content::{ConfigLoader, EntropyRng};
use status_core::{PcgRng, RngOracle, StatusConfig, ValidationMode};

/// Name of the optional status configuration file inside the data directory.
pub const STATUS_CONFIG_FILE: &str = "status.toml";

#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Root holding `status.toml` and the registry subdirectories.
    pub data_dir: PathBuf,
    /// Seed for replayable rolls; entropy when unset.
    pub seed: Option<u64>,
    /// Force strict validation regardless of `status.toml`.
    pub strict: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed: None,
            strict: false,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RPG_STATUS_DATA_DIR` - Data directory (default: platform data dir)
    /// - `RPG_STATUS_SEED` - RNG seed for deterministic rolls (default: entropy)
    /// - `RPG_STATUS_STRICT` - Reject missing fields instead of repairing them (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("RPG_STATUS_DATA_DIR") {
            config.data_dir = dir;
        }
        config.seed = read_env::<u64>("RPG_STATUS_SEED");
        if let Some(strict) = read_env_bool("RPG_STATUS_STRICT") {
            config.strict = strict;
        }

        config
    }

    /// `status.toml` from the data directory if present, else defaults.
    pub fn status_config(&self) -> Result<StatusConfig> {
        let path = self.data_dir.join(STATUS_CONFIG_FILE);
        let config = if path.is_file() {
            ConfigLoader::load(&path)?
        } else {
            tracing::debug!("{} not found, using default status config", path.display());
            StatusConfig::default()
        };

        Ok(if self.strict {
            config.with_validation_mode(ValidationMode::Strict)
        } else {
            config
        })
    }

    pub fn rng(&self) -> Box<dyn RngOracle> {
        match self.seed {
            Some(seed) => Box::new(PcgRng::new(seed)),
            None => Box::new(EntropyRng::from_entropy()),
        }
    }
}

/// Platform data directory for rpg-status
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/rpg-status`
/// - Linux: `~/.local/share/rpg-status` (or `$XDG_DATA_HOME/rpg-status`)
/// - Windows: `%APPDATA%\rpg-status`
/// - Fallback: `./data`
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "rpg-status")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
