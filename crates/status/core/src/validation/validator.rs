//! Schema-driven validators for the three stat records.
//!
//! Each record validator short-circuits on the first failing field. The
//! aggregate validators run every record validator and join the failures.

use strum::IntoEnumIterator;

use super::ValidationMode;
use super::result::{ValidationFailure, ValidationResult};
use crate::stats::{
    AttributeSet, CharacterMeta, DerivedStats, FieldKind, FieldSchema, FieldSet, Numeric,
};
use crate::value::Value;

/// Validates every attribute is an integer.
pub fn validate_attributes(
    attributes: &mut AttributeSet,
    mode: ValidationMode,
) -> ValidationResult {
    validate_fields(attributes, mode)
}

/// Validates meta field kinds, ranges and the skills map.
pub fn validate_meta(meta: &mut CharacterMeta, mode: ValidationMode) -> ValidationResult {
    validate_fields(meta, mode)
}

/// Validates every derived stat is finite or not available.
///
/// `NotAvailable` is a legitimate derived value and is never repaired.
pub fn validate_derived(derived: &DerivedStats) -> ValidationResult {
    for (stat, value) in derived.iter() {
        match value {
            Numeric::Value(number) if !number.is_finite() => {
                return ValidationResult::Failed(ValidationFailure::type_mismatch(
                    stat.key(),
                    FieldKind::Number,
                    &Value::Float(number),
                ));
            }
            _ => {}
        }
    }
    ValidationResult::Ok
}

/// Validates the three records of a character, joining every failure.
pub fn validate_all(
    attributes: &mut AttributeSet,
    meta: &mut CharacterMeta,
    derived: &DerivedStats,
    mode: ValidationMode,
) -> ValidationResult {
    validate_attributes(attributes, mode)
        .and(validate_derived(derived))
        .and(validate_meta(meta, mode))
}

/// Validates the records a character is built from, before derived stats exist.
pub fn validate_for_character(
    attributes: &mut AttributeSet,
    meta: &mut CharacterMeta,
    mode: ValidationMode,
) -> ValidationResult {
    validate_attributes(attributes, mode).and(validate_meta(meta, mode))
}

fn validate_fields<F: FieldSchema>(
    set: &mut FieldSet<F>,
    mode: ValidationMode,
) -> ValidationResult {
    for field in F::iter() {
        if set.get(field).is_not_available() {
            if set.is_frozen() {
                return ValidationResult::Failed(ValidationFailure::frozen(field.key()));
            }
            match mode {
                ValidationMode::Strict => {
                    return ValidationResult::Failed(ValidationFailure::type_mismatch(
                        field.key(),
                        field.kind(),
                        &Value::NotAvailable,
                    ));
                }
                ValidationMode::Repair => {
                    let repaired = field.default_value();
                    tracing::warn!(
                        "{} is not available, resetting to {}",
                        field.key(),
                        repaired
                    );
                    set.write(field, repaired);
                }
            }
        }

        if let Err(failure) = check_field(field, set.get(field)) {
            return ValidationResult::Failed(failure);
        }
    }
    ValidationResult::Ok
}

fn check_field<F: FieldSchema>(field: F, value: &Value) -> Result<(), ValidationFailure> {
    match (field.kind(), value) {
        (FieldKind::Integer, Value::Int(number)) => match field.range() {
            Some(range) if !range.contains(number) => Err(ValidationFailure::range(
                field.key(),
                value,
                format_args!("is outside [{}, {}]", range.start(), range.end()),
            )),
            _ => Ok(()),
        },
        (FieldKind::Text, Value::Text(text)) => {
            if field.requires_text() && text.is_empty() {
                Err(ValidationFailure::range(field.key(), value, "must not be empty"))
            } else {
                Ok(())
            }
        }
        (FieldKind::TextMap, Value::Map(entries)) => {
            match entries.iter().find(|(_, entry)| entry.as_text().is_none()) {
                Some((name, entry)) => Err(ValidationFailure::type_mismatch(
                    &format!("{}.{name}", field.key()),
                    FieldKind::Text,
                    entry,
                )),
                None => Ok(()),
            }
        }
        (expected, found) => Err(ValidationFailure::type_mismatch(field.key(), expected, found)),
    }
}
