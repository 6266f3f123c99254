//! Character metadata: progression counters, identity and skills.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::schema::{FieldKind, FieldSchema, FieldSet};
use crate::value::Value;

/// Gender code meaning "unset/unknown".
pub const GENDER_UNSET: i64 = -1;

/// Highest valid gender code.
pub const GENDER_MAX: i64 = 3;

/// Metadata fields. The strum serialization is the mapping key.
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
)]
pub enum MetaField {
    Level,
    #[strum(serialize = "EXP")]
    Experience,
    #[strum(serialize = "Magical_Level")]
    MagicalLevel,
    #[strum(serialize = "Magical_EXP")]
    MagicalExperience,
    #[strum(serialize = "Magical_Skill_Level")]
    MagicalSkillLevel,
    #[strum(serialize = "Magical_Skill_EXP")]
    MagicalSkillExperience,
    Name,
    /// Handle into the race registry.
    Race,
    Age,
    Skills,
    Gender,
}

impl FieldSchema for MetaField {
    fn kind(self) -> FieldKind {
        match self {
            MetaField::Name | MetaField::Race => FieldKind::Text,
            MetaField::Skills => FieldKind::TextMap,
            _ => FieldKind::Integer,
        }
    }

    fn range(self) -> Option<RangeInclusive<i64>> {
        match self {
            MetaField::Gender => Some(GENDER_UNSET..=GENDER_MAX),
            MetaField::Name | MetaField::Race | MetaField::Skills => None,
            _ => Some(0..=i64::MAX),
        }
    }

    fn requires_text(self) -> bool {
        matches!(self, MetaField::Name)
    }

    fn default_value(self) -> Value {
        match self.kind() {
            FieldKind::Integer if self == MetaField::Gender => Value::Int(GENDER_UNSET),
            FieldKind::Integer => Value::Int(0),
            FieldKind::Text => Value::Text(String::new()),
            FieldKind::TextMap => Value::Map(BTreeMap::new()),
            FieldKind::Number => Value::Float(0.0),
        }
    }
}

/// Character metadata record.
pub type CharacterMeta = FieldSet<MetaField>;

impl FieldSet<MetaField> {
    /// A level-1 character with no experience, no skills and unset gender.
    pub fn named(name: &str, race: &str) -> Self {
        Self::new()
            .with(MetaField::Level, Value::Int(1))
            .with(MetaField::Experience, Value::Int(0))
            .with(MetaField::MagicalLevel, Value::Int(1))
            .with(MetaField::MagicalExperience, Value::Int(0))
            .with(MetaField::MagicalSkillLevel, Value::Int(1))
            .with(MetaField::MagicalSkillExperience, Value::Int(0))
            .with(MetaField::Name, name)
            .with(MetaField::Race, race)
            .with(MetaField::Age, Value::Int(0))
            .with(MetaField::Skills, Value::Map(BTreeMap::new()))
            .with(MetaField::Gender, Value::Int(GENDER_UNSET))
    }

    pub fn name(&self) -> Option<&str> {
        self.get(MetaField::Name).as_text()
    }

    pub fn race(&self) -> Option<&str> {
        self.get(MetaField::Race).as_text()
    }

    pub fn level(&self) -> Option<i64> {
        self.int(MetaField::Level)
    }

    pub fn experience(&self) -> Option<i64> {
        self.int(MetaField::Experience)
    }

    pub fn gender(&self) -> Option<i64> {
        self.int(MetaField::Gender)
    }

    /// Skill name to description. Non-text entries are skipped.
    pub fn skills(&self) -> impl Iterator<Item = (&str, &str)> {
        self.get(MetaField::Skills)
            .as_map()
            .into_iter()
            .flatten()
            .filter_map(|(name, value)| value.as_text().map(|text| (name.as_str(), text)))
    }
}
