//! Look up registry entries.

use anyhow::{Result, anyhow};
use clap::Parser;
use status_content::{RegistryKind, RegistrySet, template};

use crate::config::CliConfig;

/// Look an entry up in the race, item, magic or skill registry
#[derive(Parser)]
pub struct Lookup {
    /// Registry: race, item, magic or skill
    #[arg(value_name = "KIND")]
    kind: String,

    /// Entry id (file name without extension); omit to list ids
    #[arg(value_name = "ID")]
    id: Option<String>,

    /// Render a `$[key]` template against the entry
    #[arg(short, long, value_name = "TEXT")]
    template: Option<String>,
}

impl Lookup {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let kind = RegistryKind::parse(&self.kind).ok_or_else(|| {
            anyhow!(
                "Unknown registry `{}` (expected race, item, magic or skill)",
                self.kind
            )
        })?;
        let registries = RegistrySet::from_data_dir(&config.data_dir)?;

        let Some(id) = self.id else {
            if let Some(registry) = registries.get(kind) {
                for id in registry.ids()? {
                    println!("{id}");
                }
            }
            return Ok(());
        };

        let entry = registries.lookup(kind, &id)?;
        if let Some(text) = &self.template {
            println!("{}", template::render_record(text, &entry.fields));
            return Ok(());
        }

        println!("== {} `{}`: {} ==", entry.kind, entry.id, entry.name());
        if let Some(description) = entry.description() {
            println!("{description}");
        }
        for (key, value) in &entry.fields {
            if key != "name" && key != "description" {
                println!("  {key:<20} {value}");
            }
        }
        Ok(())
    }
}
