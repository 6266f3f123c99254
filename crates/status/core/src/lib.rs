//! Character status model: raw attributes, metadata, derived stats and
//! level progression.
//!
//! The crate performs no I/O. Loading character files and registry lookups
//! live in `status-content`; randomness is injected through [`RngOracle`].
//!
//! # Modules
//!
//! - [`stats`]: attribute and meta records, the derived-stat calculator
//! - [`validation`]: schema checks with optional auto-repair
//! - [`progression`]: experience thresholds per track
//! - [`character`]: the aggregate tying everything together
pub mod character;
pub mod config;
pub mod error;
pub mod progression;
pub mod rng;
pub mod stats;
pub mod validation;
pub mod value;

pub use character::{Character, CharacterBuilder, CharacterState, Progress, Snapshot, Thresholds};
pub use config::StatusConfig;
pub use error::{ClassifiedError, ErrorSeverity, StatusError};
pub use progression::{Threshold, Track, max_experience, max_experience_by_name};
pub use rng::{LowerBoundRng, PcgRng, RngOracle};
pub use stats::{
    Attribute, AttributeSet, CharacterMeta, DerivedStat, DerivedStats, FieldKind, FieldSchema,
    FieldSet, MetaField, Numeric, StatCalculator,
};
pub use validation::{
    FailureKind, ValidationFailure, ValidationMode, ValidationResult, validate_all,
    validate_attributes, validate_derived, validate_for_character, validate_meta,
};
pub use value::{Record, Value};
