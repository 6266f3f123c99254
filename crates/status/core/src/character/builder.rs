use super::{Character, CharacterState, Thresholds};
use crate::config::StatusConfig;
use crate::error::StatusError;
use crate::rng::RngOracle;
use crate::stats::{AttributeSet, CharacterMeta, DerivedStats, StatCalculator};
use crate::validation::validate_for_character;

/// Builder for [`Character`]: validates the raw records before the character
/// exists.
///
/// ```
/// use status_core::{AttributeSet, CharacterBuilder, CharacterMeta, PcgRng};
///
/// let meta = CharacterMeta::named("Hero", "Human");
/// let hero = CharacterBuilder::new(meta, AttributeSet::uniform(10))
///     .build(&mut PcgRng::new(7))
///     .unwrap();
/// assert_eq!(hero.meta().level(), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct CharacterBuilder {
    meta: CharacterMeta,
    attributes: AttributeSet,
    config: StatusConfig,
}

impl CharacterBuilder {
    pub fn new(meta: CharacterMeta, attributes: AttributeSet) -> Self {
        Self {
            meta,
            attributes,
            config: StatusConfig::default(),
        }
    }

    /// Override status configuration
    pub fn config(mut self, config: StatusConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates (and, in repair mode, fixes up) both records, then computes
    /// derived stats and the experience thresholds of every track.
    ///
    /// If either record is already frozen the character is built frozen:
    /// nothing is recomputed, derived stats are all not available and every
    /// threshold is `Max`.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::StaticTyping` carrying every validation failure,
    /// joined with `"; "`.
    pub fn build<R>(self, rng: &mut R) -> Result<Character, StatusError>
    where
        R: RngOracle + ?Sized,
    {
        let Self {
            mut meta,
            mut attributes,
            config,
        } = self;

        validate_for_character(&mut attributes, &mut meta, config.validation_mode)
            .into_static_typing()?;

        if attributes.is_frozen() || meta.is_frozen() {
            attributes.freeze();
            meta.freeze();
            tracing::debug!("building {:?} from frozen records", meta.name());
            return Ok(Character {
                attributes,
                meta,
                derived: DerivedStats::unavailable(),
                thresholds: Thresholds::MAX,
                state: CharacterState::Frozen,
                config,
            });
        }

        let derived = StatCalculator::recompute(&attributes);
        let thresholds = Thresholds::roll(&meta, rng);

        Ok(Character {
            attributes,
            meta,
            derived,
            thresholds,
            state: CharacterState::Active,
            config,
        })
    }
}
