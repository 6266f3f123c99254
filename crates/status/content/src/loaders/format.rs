//! Text formats for character and registry files.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use status_core::Record;

use crate::error::SerializationError;
use crate::loaders::LoadResult;

/// A supported on-disk text format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataFormat {
    Ron,
    Toml,
    Yaml,
}

impl DataFormat {
    /// Extensions tried, in order, when looking a file up by id.
    pub const EXTENSIONS: [&'static str; 4] = ["ron", "toml", "yaml", "yml"];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "ron" => Some(DataFormat::Ron),
            "toml" => Some(DataFormat::Toml),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(Self::from_extension)
    }

    /// Like [`from_path`](Self::from_path), failing for unknown extensions.
    pub fn detect(path: &Path) -> LoadResult<Self> {
        Self::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported file extension for {} (expected one of {})",
                path.display(),
                Self::EXTENSIONS.join(", ")
            )
        })
    }

    /// Canonical extension written by [`CharacterLoader::save`](crate::CharacterLoader::save).
    pub const fn extension(self) -> &'static str {
        match self {
            DataFormat::Ron => "ron",
            DataFormat::Toml => "toml",
            DataFormat::Yaml => "yaml",
        }
    }

    pub fn parse<T: DeserializeOwned>(self, text: &str) -> LoadResult<T> {
        let parsed = match self {
            DataFormat::Ron => ron::from_str(text).map_err(|e| anyhow::anyhow!("{e}")),
            DataFormat::Toml => toml::from_str(text).map_err(|e| anyhow::anyhow!("{e}")),
            DataFormat::Yaml => serde_yaml::from_str(text).map_err(|e| anyhow::anyhow!("{e}")),
        };
        parsed.map_err(|e| anyhow::anyhow!("Failed to parse {self}: {e}"))
    }

    /// Parses a flat character or registry mapping.
    pub fn parse_record(self, text: &str) -> LoadResult<Record> {
        self.parse(text)
    }

    /// Renders a record as text.
    ///
    /// # Errors
    ///
    /// TOML has no null, so a record holding `Value::NotAvailable` cannot be
    /// dumped as TOML.
    pub fn dump(self, record: &Record) -> Result<String, SerializationError> {
        self.dump_value(record)
    }

    pub fn dump_value<T>(self, value: &T) -> Result<String, SerializationError>
    where
        T: Serialize + fmt::Debug,
    {
        let rendered = match self {
            DataFormat::Ron => {
                ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                    .map_err(|e| e.to_string())
            }
            DataFormat::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            DataFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        };

        rendered.map_err(|message| SerializationError {
            format: self,
            message,
            value: format!("{value:?}"),
        })
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataFormat::Ron => "RON",
            DataFormat::Toml => "TOML",
            DataFormat::Yaml => "YAML",
        })
    }
}
