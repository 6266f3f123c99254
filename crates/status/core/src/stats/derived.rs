//! Derived ("computational") stats.
//!
//! Combat and resource values derived from the raw attributes. Only the
//! [`StatCalculator`](super::StatCalculator) produces them; there are no
//! setters, so a `DerivedStats` value is read-only once built.

use super::numeric::Numeric;
use crate::value::Record;

/// Names of the derived stats. The strum serialization is the mapping key.
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
pub enum DerivedStat {
    #[strum(serialize = "Magical_Atk")]
    MagicalAttack,
    #[strum(serialize = "Magical_Def")]
    MagicalDefense,
    #[strum(serialize = "Critical_Percentage")]
    CriticalPercentage,
    #[strum(serialize = "Evade_Percentage")]
    EvadePercentage,
    #[strum(serialize = "Atk")]
    Attack,
    #[strum(serialize = "Def")]
    Defense,
    Accuracy,
    #[strum(serialize = "Speed_Acceleration")]
    SpeedAcceleration,
    #[strum(serialize = "Max_HitPoint")]
    MaxHitPoint,
    #[strum(serialize = "Max_MagicalPoint")]
    MaxMagicalPoint,
    #[strum(serialize = "Usage_Acceleration")]
    UsageAcceleration,
    #[strum(serialize = "Stamina_Point")]
    StaminaPoint,
    #[strum(serialize = "Resistance_Point")]
    ResistancePoint,
    #[strum(serialize = "Leadership_Point")]
    LeadershipPoint,
}

impl DerivedStat {
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Derived combat and resource statistics.
///
/// Each field is a finite number or `Numeric::NotAvailable` for stats that
/// are not modeled (accuracy, usage acceleration, resistance points).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub magical_attack: Numeric,
    pub magical_defense: Numeric,
    pub critical_percentage: Numeric,
    pub evade_percentage: Numeric,
    pub attack: Numeric,
    pub defense: Numeric,
    pub accuracy: Numeric,
    pub speed_acceleration: Numeric,
    pub max_hit_point: Numeric,
    pub max_magical_point: Numeric,
    pub usage_acceleration: Numeric,
    pub stamina_point: Numeric,
    pub resistance_point: Numeric,
    pub leadership_point: Numeric,
}

impl DerivedStats {
    /// Every stat not available; used for characters built frozen.
    pub const fn unavailable() -> Self {
        const NA: Numeric = Numeric::NotAvailable;
        Self {
            magical_attack: NA,
            magical_defense: NA,
            critical_percentage: NA,
            evade_percentage: NA,
            attack: NA,
            defense: NA,
            accuracy: NA,
            speed_acceleration: NA,
            max_hit_point: NA,
            max_magical_point: NA,
            usage_acceleration: NA,
            stamina_point: NA,
            resistance_point: NA,
            leadership_point: NA,
        }
    }

    pub const fn get(&self, stat: DerivedStat) -> Numeric {
        match stat {
            DerivedStat::MagicalAttack => self.magical_attack,
            DerivedStat::MagicalDefense => self.magical_defense,
            DerivedStat::CriticalPercentage => self.critical_percentage,
            DerivedStat::EvadePercentage => self.evade_percentage,
            DerivedStat::Attack => self.attack,
            DerivedStat::Defense => self.defense,
            DerivedStat::Accuracy => self.accuracy,
            DerivedStat::SpeedAcceleration => self.speed_acceleration,
            DerivedStat::MaxHitPoint => self.max_hit_point,
            DerivedStat::MaxMagicalPoint => self.max_magical_point,
            DerivedStat::UsageAcceleration => self.usage_acceleration,
            DerivedStat::StaminaPoint => self.stamina_point,
            DerivedStat::ResistancePoint => self.resistance_point,
            DerivedStat::LeadershipPoint => self.leadership_point,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DerivedStat, Numeric)> + '_ {
        use strum::IntoEnumIterator;
        DerivedStat::iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Flattens into a mapping; unmodeled stats become `Value::NotAvailable`.
    pub fn to_record(&self) -> Record {
        self.iter()
            .map(|(stat, value)| (stat.key().to_owned(), value.into()))
            .collect()
    }

    /// Field-by-field equality within `tolerance`.
    pub fn approx_eq(&self, other: &DerivedStats, tolerance: f64) -> bool {
        self.iter()
            .all(|(stat, value)| value.approx_eq(other.get(stat), tolerance))
    }
}
