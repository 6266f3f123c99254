//! Raw attributes.
//!
//! The thirteen base, player-facing stats. They only change through leveling,
//! and every derived stat is a function of them.

use strum::IntoEnumIterator;

use super::schema::{FieldKind, FieldSchema, FieldSet};
use crate::value::Value;

/// The thirteen raw attributes. The strum serialization is the mapping key.
///
/// - **Str** (Strength): physical power, attack, carrying
/// - **Agi** (Agility): evasion and movement speed
/// - **Dex** (Dexterity): precision, evasion and speed
/// - **Int** (Intelligence): learning; not used by any derived stat yet
/// - **Luck**: critical chance
/// - **Wis** (Wisdom): magic pool, magical attack/defense, leadership
/// - **Will** (Willpower): magic pool, magical attack/defense
/// - **Vit** (Vitality): health and defense
/// - **Per** (Perception): critical chance
/// - **End** (Endurance): health and defense
/// - **Res** (Resistance): health and defense
/// - **Sta** (Stamina): magic pool, stamina points
/// - **Bra** (Bravery): leadership and critical chance
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum Attribute {
    #[strum(serialize = "Str")]
    Strength,
    #[strum(serialize = "Agi")]
    Agility,
    #[strum(serialize = "Dex")]
    Dexterity,
    #[strum(serialize = "Int")]
    Intelligence,
    #[strum(serialize = "Luck")]
    Luck,
    #[strum(serialize = "Wis")]
    Wisdom,
    #[strum(serialize = "Will")]
    Willpower,
    #[strum(serialize = "Vit")]
    Vitality,
    #[strum(serialize = "Per")]
    Perception,
    #[strum(serialize = "End")]
    Endurance,
    #[strum(serialize = "Res")]
    Resistance,
    #[strum(serialize = "Sta")]
    Stamina,
    #[strum(serialize = "Bra")]
    Bravery,
}

impl Attribute {
    /// Attributes that grow on every level-up. Luck and Bravery are innate.
    pub const GROWTH: [Attribute; 11] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Dexterity,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Willpower,
        Attribute::Vitality,
        Attribute::Perception,
        Attribute::Endurance,
        Attribute::Resistance,
        Attribute::Stamina,
    ];

    pub const fn grows_on_level_up(self) -> bool {
        !matches!(self, Attribute::Luck | Attribute::Bravery)
    }
}

impl FieldSchema for Attribute {
    fn kind(self) -> FieldKind {
        FieldKind::Integer
    }
}

/// Raw attribute record.
pub type AttributeSet = FieldSet<Attribute>;

impl FieldSet<Attribute> {
    /// Every attribute set to `score`.
    pub fn uniform(score: i64) -> Self {
        Attribute::iter().fold(Self::new(), |set, attribute| {
            set.with(attribute, Value::Int(score))
        })
    }

    /// Integer score of an attribute, if it holds one.
    pub fn score(&self, attribute: Attribute) -> Option<i64> {
        self.int(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn thirteen_attributes_eleven_grow() {
        assert_eq!(Attribute::COUNT, 13);
        assert_eq!(Attribute::GROWTH.len(), 11);
        for attribute in Attribute::iter() {
            assert_eq!(
                Attribute::GROWTH.contains(&attribute),
                attribute.grows_on_level_up(),
                "{attribute} growth mismatch"
            );
        }
    }

    #[test]
    fn keys_parse_back() {
        for attribute in Attribute::iter() {
            assert_eq!(Attribute::from_key(attribute.key()), Some(attribute));
            assert_eq!(attribute.key().parse::<Attribute>().ok(), Some(attribute));
        }
        assert_eq!(Attribute::Willpower.key(), "Will");
        assert_eq!(Attribute::from_key("Con"), None);
    }
}
