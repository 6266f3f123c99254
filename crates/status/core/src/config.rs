use crate::validation::ValidationMode;

/// Tunables for building and progressing characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusConfig {
    /// What the validator does with not-available raw fields.
    pub validation_mode: ValidationMode,
    /// Smallest per-attribute gain on level-up.
    pub growth_min: i64,
    /// Largest per-attribute gain on level-up (inclusive).
    pub growth_max: i64,
}

impl StatusConfig {
    pub const DEFAULT_GROWTH_MIN: i64 = 1;
    pub const DEFAULT_GROWTH_MAX: i64 = 5;

    pub const fn strict() -> Self {
        Self {
            validation_mode: ValidationMode::Strict,
            growth_min: Self::DEFAULT_GROWTH_MIN,
            growth_max: Self::DEFAULT_GROWTH_MAX,
        }
    }

    #[must_use]
    pub const fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::Repair,
            growth_min: Self::DEFAULT_GROWTH_MIN,
            growth_max: Self::DEFAULT_GROWTH_MAX,
        }
    }
}
