//! Validation of raw and derived stat records.
//!
//! Validators return a [`ValidationResult`] instead of an error so callers can
//! branch on failure. The [`ValidationMode`] decides what happens to a
//! not-available raw field:
//!
//! | Mode     | Mutable record                     | Frozen record     |
//! |----------|------------------------------------|-------------------|
//! | `Repair` | reset to schema default + warning  | `FrozenMutation`  |
//! | `Strict` | `TypeMismatch`                     | `FrozenMutation`  |

mod result;
mod validator;

pub use result::{FailureKind, ValidationFailure, ValidationResult};
pub use validator::{
    validate_all, validate_attributes, validate_derived, validate_for_character, validate_meta,
};

/// How strictly not-available raw fields are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ValidationMode {
    /// Auto-repair not-available fields with their defaults.
    #[default]
    Repair,
    /// Treat not-available fields as type mismatches.
    Strict,
}
