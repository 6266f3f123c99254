//! Print a character file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use status_content::template;
use status_core::{Character, Track};

use crate::config::CliConfig;

/// Print a character's records and derived stats
#[derive(Parser)]
pub struct Show {
    /// Character file (.ron, .toml, .yaml or .yml)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print meta, attributes and derived stats as JSON
    #[arg(long)]
    json: bool,

    /// Render a `$[key]` template against the character instead
    #[arg(short, long, value_name = "TEXT", conflicts_with = "json")]
    template: Option<String>,
}

impl Show {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut rng = config.rng();
        let character = super::load_character(&self.file, config, rng.as_mut())?;
        let (meta, attributes, derived) = character.serialize_full();

        if self.json {
            let output = serde_json::json!({
                "meta": meta,
                "attributes": attributes,
                "derived": derived,
            });
            let text = serde_json::to_string_pretty(&output).context("Failed to render JSON")?;
            println!("{text}");
            return Ok(());
        }

        if let Some(text) = &self.template {
            let mut vars = character.serialize();
            vars.extend(derived);
            println!("{}", template::render_record(text, &vars));
            return Ok(());
        }

        print_summary(&character);
        Ok(())
    }
}

fn print_summary(character: &Character) {
    let (meta, attributes, derived) = character.serialize_full();

    println!("== {} ({}) ==", character.meta().name().unwrap_or("?"), character.state());
    for (key, value) in &meta {
        println!("  {key:<20} {value}");
    }

    println!("-- attributes --");
    for (key, value) in &attributes {
        println!("  {key:<20} {value}");
    }

    println!("-- derived --");
    for (key, value) in &derived {
        println!("  {key:<20} {value}");
    }

    println!("-- next level --");
    for track in [Track::General, Track::Magical, Track::MagicalSkill] {
        println!("  {:<20} {}", track.to_string(), character.threshold(track));
    }
}
