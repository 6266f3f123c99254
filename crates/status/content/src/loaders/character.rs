//! Character file loader and writer.

use std::path::Path;

use status_core::{Character, Record, RngOracle, StatusConfig};

use crate::error::SerializationError;
use crate::loaders::{DataFormat, LoadResult, read_file};

/// Loads and saves characters as flat mappings of meta and attribute keys.
///
/// # File shape
///
/// ```yaml
/// Name: "Debug #0"
/// Race: DebugRace
/// Level: 1
/// EXP: 0
/// Str: 10
/// Skills:
///   Debug: debug skill
/// ```
pub struct CharacterLoader;

impl CharacterLoader {
    /// Read a character file into its raw mapping without validating it.
    pub fn load_record(path: &Path) -> LoadResult<Record> {
        let format = DataFormat::detect(path)?;
        let content = read_file(path)?;
        format
            .parse_record(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load character {}: {}", path.display(), e))
    }

    /// Load and build a character.
    ///
    /// # Arguments
    ///
    /// * `path` - `.ron`, `.toml`, `.yaml` or `.yml` file
    /// * `config` - validation mode and growth range for the character
    /// * `rng` - rolls the initial experience thresholds
    pub fn load<R>(path: &Path, config: StatusConfig, rng: &mut R) -> LoadResult<Character>
    where
        R: RngOracle + ?Sized,
    {
        let record = Self::load_record(path)?;
        let character = Character::from_record(&record, config, rng)
            .map_err(|e| anyhow::anyhow!("Invalid character {}: {}", path.display(), e))?;
        tracing::debug!("loaded {:?} from {}", character.meta().name(), path.display());
        Ok(character)
    }

    /// Render a character's flat mapping in `format`.
    pub fn dump(character: &Character, format: DataFormat) -> Result<String, SerializationError> {
        format.dump(&character.serialize())
    }

    /// Write a character to `path`, in the format its extension names.
    pub fn save(path: &Path, character: &Character) -> LoadResult<()> {
        let format = DataFormat::detect(path)?;
        let content = Self::dump(character, format)?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
    }
}
