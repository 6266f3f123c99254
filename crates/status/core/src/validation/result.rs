//! Structured validation outcomes.

use std::fmt;

use crate::error::StatusError;
use crate::stats::FieldKind;
use crate::value::Value;

/// Class of a validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Wrong primitive kind.
    TypeMismatch,
    /// Value outside the field's domain.
    Range,
    /// A frozen record would have needed a repair.
    FrozenMutation,
}

impl FailureKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "type mismatch",
            Self::Range => "range error",
            Self::FrozenMutation => "frozen mutation",
        }
    }
}

/// Why a record failed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationFailure {
    pub kind: FailureKind,
    /// Mapping key of the offending field.
    pub field: Option<String>,
    /// The offending value, as found.
    pub value: Option<Value>,
    /// Human-readable reason. Combined failures join reasons with `"; "`.
    pub reason: String,
}

impl ValidationFailure {
    pub(crate) fn type_mismatch(field: &str, expected: FieldKind, found: &Value) -> Self {
        Self {
            kind: FailureKind::TypeMismatch,
            field: Some(field.to_owned()),
            value: Some(found.clone()),
            reason: format!(
                "{field}: expected {expected}, found {} {found}",
                found.kind_name()
            ),
        }
    }

    pub(crate) fn range(field: &str, found: &Value, detail: impl fmt::Display) -> Self {
        Self {
            kind: FailureKind::Range,
            field: Some(field.to_owned()),
            value: Some(found.clone()),
            reason: format!("{field}: {found} {detail}"),
        }
    }

    pub(crate) fn frozen(field: &str) -> Self {
        Self {
            kind: FailureKind::FrozenMutation,
            field: Some(field.to_owned()),
            value: Some(Value::NotAvailable),
            reason: format!("{field}: not available and the record is frozen, cannot repair"),
        }
    }

    /// Merges two failures into one diagnostic.
    ///
    /// The first failure keeps its kind, field and value; the reasons are
    /// concatenated so neither is dropped.
    #[must_use]
    pub fn combine(self, other: ValidationFailure) -> Self {
        Self {
            reason: format!("{}; {}", self.reason, other.reason),
            ..self
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.reason)
    }
}

/// Outcome of a validator call.
///
/// Success carries nothing; failure always carries a full
/// [`ValidationFailure`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum ValidationResult {
    Ok,
    Failed(ValidationFailure),
}

impl ValidationResult {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    pub const fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Ok => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Joins two results, concatenating reasons when both failed.
    pub fn and(self, other: ValidationResult) -> Self {
        match (self, other) {
            (Self::Failed(first), Self::Failed(second)) => Self::Failed(first.combine(second)),
            (Self::Failed(failure), Self::Ok) | (Self::Ok, Self::Failed(failure)) => {
                Self::Failed(failure)
            }
            (Self::Ok, Self::Ok) => Self::Ok,
        }
    }

    /// Converts a failure into `StatusError::StaticTyping`.
    pub fn into_static_typing(self) -> Result<(), StatusError> {
        match self {
            Self::Ok => Ok(()),
            Self::Failed(failure) => Err(StatusError::StaticTyping {
                reason: failure.reason,
            }),
        }
    }
}

impl From<Result<(), ValidationFailure>> for ValidationResult {
    fn from(result: Result<(), ValidationFailure>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(failure) => Self::Failed(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_keeps_both_reasons() {
        let first =
            ValidationFailure::type_mismatch("Str", FieldKind::Integer, &Value::from("foo"));
        let second = ValidationFailure::range("Gender", &Value::Int(7), "is outside [-1, 3]");

        let combined = ValidationResult::Failed(first).and(ValidationResult::Failed(second));
        let failure = combined.failure().unwrap();

        assert_eq!(failure.kind, FailureKind::TypeMismatch);
        assert_eq!(failure.field.as_deref(), Some("Str"));
        assert_eq!(
            failure.reason,
            "Str: expected integer, found text \"foo\"; Gender: 7 is outside [-1, 3]"
        );
    }

    #[test]
    fn ok_is_identity() {
        let failure = ValidationFailure::frozen("Luck");
        assert_eq!(
            ValidationResult::Ok.and(ValidationResult::Failed(failure.clone())),
            ValidationResult::Failed(failure)
        );
        assert!(ValidationResult::Ok.and(ValidationResult::Ok).is_ok());
    }
}
