//! Field schemas and the record type shared by attributes and character meta.
//!
//! Each raw record is a [`FieldSet`] keyed by a field enum. The enum carries
//! the schema: mapping key, expected kind, allowed range and repair default.
//! Validators walk the schema instead of inspecting field names at runtime.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use strum::IntoEnumIterator;

use crate::error::StatusError;
use crate::value::{Record, Value};

/// Primitive kind a field is expected to hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// `Value::Int`
    Integer,
    /// `Value::Text`
    Text,
    /// `Value::Map` whose entries are all `Value::Text`
    TextMap,
    /// A finite real number (derived stats)
    Number,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Text => "text",
            Self::TextMap => "map of text to text",
            Self::Number => "finite number",
        })
    }
}

/// Schema of one field in a raw record.
pub trait FieldSchema:
    Copy + Ord + fmt::Debug + IntoEnumIterator + Into<&'static str> + 'static
{
    /// Mapping key used in character files.
    fn key(self) -> &'static str {
        self.into()
    }

    fn kind(self) -> FieldKind;

    /// Allowed integer range, if the field is bounded.
    fn range(self) -> Option<RangeInclusive<i64>> {
        None
    }

    /// Whether an empty text value is rejected.
    fn requires_text(self) -> bool {
        false
    }

    /// Value written when a not-available field is auto-repaired.
    fn default_value(self) -> Value {
        match self.kind() {
            FieldKind::Integer => Value::Int(0),
            FieldKind::Text => Value::Text(String::new()),
            FieldKind::TextMap => Value::Map(BTreeMap::new()),
            FieldKind::Number => Value::Float(0.0),
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|field| field.key() == key)
    }
}

/// A raw record: one [`Value`] per schema field plus a frozen tag.
///
/// Every schema field is always present; fields not supplied by a loader hold
/// [`Value::NotAvailable`]. Once frozen, no setter succeeds.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSet<F: FieldSchema> {
    values: BTreeMap<F, Value>,
    frozen: bool,
}

impl<F: FieldSchema> FieldSet<F> {
    /// Every field not available, mutable.
    pub fn new() -> Self {
        Self {
            values: F::iter().map(|field| (field, Value::NotAvailable)).collect(),
            frozen: false,
        }
    }

    /// Builder-style setter for assembling a record before validation.
    ///
    /// A frozen record is returned unchanged. Use [`FieldSet::try_with`] to
    /// get `StatusError::FrozenMutation` instead.
    #[must_use]
    pub fn with(self, field: F, value: impl Into<Value>) -> Self {
        self.try_with(field, value).unwrap_or_else(|(set, _)| set)
    }

    /// Builder-style [`FieldSet::set`].
    ///
    /// # Errors
    ///
    /// Hands the untouched record back with `StatusError::FrozenMutation` if
    /// it is frozen.
    pub fn try_with(
        mut self,
        field: F,
        value: impl Into<Value>,
    ) -> Result<Self, (Self, StatusError)> {
        match self.set(field, value) {
            Ok(()) => Ok(self),
            Err(err) => Err((self, err)),
        }
    }

    /// Picks the schema's keys out of a flat record. Other keys are ignored.
    pub fn from_record(record: &Record) -> Self {
        let mut set = Self::new();
        for field in F::iter() {
            if let Some(value) = record.get(field.key()) {
                set.values.insert(field, value.clone());
            }
        }
        set
    }

    /// Flattens the record into schema keys.
    pub fn to_record(&self) -> Record {
        self.values
            .iter()
            .map(|(field, value)| (field.key().to_owned(), value.clone()))
            .collect()
    }

    pub fn get(&self, field: F) -> &Value {
        const NOT_AVAILABLE: &Value = &Value::NotAvailable;
        self.values.get(&field).unwrap_or(NOT_AVAILABLE)
    }

    pub fn int(&self, field: F) -> Option<i64> {
        self.get(field).as_int()
    }

    /// Writes a field.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::FrozenMutation` if the record is frozen.
    pub fn set(&mut self, field: F, value: impl Into<Value>) -> Result<(), StatusError> {
        if self.frozen {
            return Err(StatusError::frozen("write a frozen record"));
        }
        self.values.insert(field, value.into());
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &Value)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// One-way transition to the frozen state.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Frozen copy; `self` is left untouched.
    pub fn to_frozen(&self) -> Self {
        Self {
            values: self.values.clone(),
            frozen: true,
        }
    }

    /// Write path for the validator and the character aggregate, which have
    /// already established that the record is mutable.
    pub(crate) fn write(&mut self, field: F, value: Value) {
        debug_assert!(!self.frozen, "write on frozen {field:?}");
        self.values.insert(field, value);
    }

    /// Adds `delta` to an integer field. Non-integer fields are left alone.
    pub(crate) fn add(&mut self, field: F, delta: i64) {
        if let Some(current) = self.int(field) {
            self.write(field, Value::Int(current.saturating_add(delta)));
        }
    }
}

impl<F: FieldSchema> Default for FieldSet<F> {
    fn default() -> Self {
        Self::new()
    }
}
