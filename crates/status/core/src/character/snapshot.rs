//! Frozen point-in-time copy of a character's records.

use crate::stats::{AttributeSet, CharacterMeta, DerivedStats};
use crate::value::Record;

/// Immutable copy of a character's three records.
///
/// Both raw records are frozen and every record is only reachable through
/// shared references. Taking a snapshot leaves the live character untouched,
/// and a snapshot never changes when the character later levels up.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    attributes: AttributeSet,
    meta: CharacterMeta,
    derived: DerivedStats,
}

impl Snapshot {
    pub(crate) fn capture(
        attributes: &AttributeSet,
        meta: &CharacterMeta,
        derived: &DerivedStats,
    ) -> Self {
        Self {
            attributes: attributes.to_frozen(),
            meta: meta.to_frozen(),
            derived: derived.clone(),
        }
    }

    pub const fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub const fn meta(&self) -> &CharacterMeta {
        &self.meta
    }

    pub const fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    /// The three records, raw ones still frozen.
    pub fn into_parts(self) -> (AttributeSet, CharacterMeta, DerivedStats) {
        (self.attributes, self.meta, self.derived)
    }

    /// Meta and attributes flattened into one mapping.
    pub fn to_record(&self) -> Record {
        let mut record = self.meta.to_record();
        record.extend(self.attributes.to_record());
        record
    }
}
