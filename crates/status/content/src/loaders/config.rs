//! Status configuration loader.

use std::path::Path;

use status_core::StatusConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for status configuration from TOML files.
///
/// Missing keys keep their defaults:
///
/// ```toml
/// validation_mode = "strict"
/// growth_min = 1
/// growth_max = 5
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<StatusConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<StatusConfig> {
        let config: StatusConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.growth_min > config.growth_max {
            anyhow::bail!(
                "growth_min ({}) must not exceed growth_max ({})",
                config.growth_min,
                config.growth_max
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use status_core::ValidationMode;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), StatusConfig::default());
    }

    #[test]
    fn reads_mode_and_growth() {
        let config = ConfigLoader::parse("validation_mode = \"strict\"\ngrowth_max = 8\n").unwrap();
        assert_eq!(config.validation_mode, ValidationMode::Strict);
        assert_eq!(config.growth_min, 1);
        assert_eq!(config.growth_max, 8);
    }

    #[test]
    fn inverted_growth_range_is_rejected() {
        assert!(ConfigLoader::parse("growth_min = 6\ngrowth_max = 2\n").is_err());
    }
}
