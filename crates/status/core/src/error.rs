//! Error types shared by the status model.
//!
//! Validators never return these directly; they produce a
//! [`ValidationResult`](crate::validation::ValidationResult) so callers can
//! branch on failure. Errors are reserved for operations that cannot proceed:
//! building a character from invalid records, recomputing frozen data, or
//! selecting an unknown progression track.
//!
//! # Design Principles
//!
//! - **Type Safety**: one enum, one variant per failure class
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **Stable Codes**: every variant maps to a static identifier for logs and tests

use crate::stats::FieldKind;
use crate::value::Value;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: a logic defect in the caller (e.g. recomputing frozen data)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: non-integer attribute, gender out of range, unknown track
    Validation,

    /// Unexpected use of the model.
    ///
    /// Examples: asking the calculator to recompute a frozen attribute set.
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all status errors.
///
/// This trait provides a uniform interface for error classification across
/// the workspace; `status-content` implements it for its registry errors too.
pub trait ClassifiedError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by the status model.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusError {
    /// A field holds a value of the wrong primitive kind.
    #[error("field `{field}` expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        found: Value,
    },

    /// A field holds a value outside its domain.
    #[error("field `{field}` value {value} is out of range: {reason}")]
    Range {
        field: String,
        value: Value,
        reason: String,
    },

    /// A write or recomputation was attempted on frozen data.
    #[error("cannot {action}: record is frozen")]
    FrozenMutation { action: String },

    /// A selector (e.g. a progression track name) is not recognised.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Aggregate validation failure while building a character.
    ///
    /// `reason` carries every failing sub-validation, joined with `"; "`.
    #[error("invalid character data: {reason}")]
    StaticTyping { reason: String },
}

impl StatusError {
    pub(crate) fn frozen(action: &str) -> Self {
        Self::FrozenMutation {
            action: action.to_owned(),
        }
    }
}

impl ClassifiedError for StatusError {
    fn severity(&self) -> ErrorSeverity {
        use StatusError::*;
        match self {
            // Recomputing or writing frozen data is a caller defect
            FrozenMutation { .. } => ErrorSeverity::Internal,

            TypeMismatch { .. } | Range { .. } | InvalidArgument(_) | StaticTyping { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use StatusError::*;
        match self {
            TypeMismatch { .. } => "STATUS_TYPE_MISMATCH",
            Range { .. } => "STATUS_RANGE",
            FrozenMutation { .. } => "STATUS_FROZEN_MUTATION",
            InvalidArgument(_) => "STATUS_INVALID_ARGUMENT",
            StaticTyping { .. } => "STATUS_STATIC_TYPING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_mutation_is_internal() {
        let err = StatusError::frozen("recompute derived stats");
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "STATUS_FROZEN_MUTATION");
        assert_eq!(
            err.to_string(),
            "cannot recompute derived stats: record is frozen"
        );
    }

    #[test]
    fn static_typing_is_validation() {
        let err = StatusError::StaticTyping {
            reason: "a; b".into(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.to_string(), "invalid character data: a; b");
    }
}
