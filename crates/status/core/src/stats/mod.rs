//! Stat model: raw attributes, character metadata and derived stats.
//!
//! # Architecture
//!
//! ```text
//! [ Record (loader mapping) ]
//!      ↓ partition by key
//! [ AttributeSet ]  [ CharacterMeta ]     raw, validated, mutable until frozen
//!      ↓
//! [ StatCalculator ]
//!      ↓
//! [ DerivedStats ]                        computed, read-only
//! ```
//!
//! `AttributeSet` and `CharacterMeta` are both [`FieldSet`]s: one record type
//! keyed by a schema enum, with a frozen tag instead of a parallel frozen type.

pub mod attributes;
pub mod calculator;
pub mod derived;
pub mod meta;
pub mod numeric;
pub mod schema;

pub use attributes::{Attribute, AttributeSet};
pub use calculator::{FORMULA_INPUTS, StatCalculator};
pub use derived::{DerivedStat, DerivedStats};
pub use meta::{CharacterMeta, GENDER_MAX, GENDER_UNSET, MetaField};
pub use numeric::Numeric;
pub use schema::{FieldKind, FieldSchema, FieldSet};
