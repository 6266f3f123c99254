//! Primitive values exchanged with loaders and serializers.
//!
//! Character files are read into a flat [`Record`]: a string-keyed mapping of
//! [`Value`]s. Records are partitioned into attribute and meta fields by key
//! name; nothing here knows about the field schema.

use std::collections::BTreeMap;
use std::fmt;

/// Flat primitive mapping produced by loaders and consumed by serializers.
pub type Record = BTreeMap<String, Value>;

/// A primitive value as it appears in a character file.
///
/// `NotAvailable` is written as the format's null/unit value. It is distinct
/// from zero and from an empty string.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    // Int must stay ahead of Float: untagged floats also accept integers.
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Map(BTreeMap<String, Value>),
    NotAvailable,
}

impl Value {
    /// Short name of the value's kind, used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "text",
            Self::Map(_) => "map",
            Self::NotAvailable => "not-available",
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_not_available(&self) -> bool {
        matches!(self, Self::NotAvailable)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self::Map(value)
    }
}
