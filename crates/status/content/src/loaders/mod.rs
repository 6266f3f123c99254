//! Loaders for character files and status configuration.
//!
//! Character files may be RON, TOML or YAML; the format is picked from the
//! file extension (see [`DataFormat`]).

pub mod character;
pub mod config;
pub mod format;

pub use character::CharacterLoader;
pub use config::ConfigLoader;
pub use format::DataFormat;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
