//! Stat calculator: raw attributes → derived stats.
//!
//! Formulas (all divisions are real divisions):
//! - MaxHP = ((Vit×10 + End×3 + Res×2 + Str×1.4) / 15) × 10
//! - MaxMP = ((Sta×30 + Will×10 + Wis×3) / 10) × 1.3
//! - Crit% = (((Str×10 + Sta×5 + Per×1.2 + Bra×1.3/4) / 1.5) × 2 / 100) + Luck/3
//! - Evade% = ((Agi×40 + Dex×20) / 50) / 100
//! - SpeedAcceleration = (Agi×20 + Dex×10) / 400
//! - Atk = (Str×60 + Will×1.5 + Sta×5) / 59
//! - Def = ((Vit×40 + End×4.6 + Res×2.4 + Str×3.4) / 60) × 2
//! - MagDef = (MaxMP + Will×10 + Wis×2) / 13
//! - MagAtk = (MaxMP + Will×10 + Wis×2 + Sta×1.004) / 13
//! - StaminaPoint = Sta × 10
//! - LeadershipPoint = ((Bra×10 + Wis×2 + Will×1.3) / 12) × 1.2
//! - Accuracy, ResistancePoint, UsageAcceleration: not available

use super::attributes::{Attribute, AttributeSet};
use super::derived::DerivedStats;
use super::numeric::Numeric;
use super::schema::FieldKind;
use crate::error::StatusError;

/// Attributes read by at least one formula. Intelligence is not used yet.
pub const FORMULA_INPUTS: [Attribute; 12] = [
    Attribute::Strength,
    Attribute::Agility,
    Attribute::Dexterity,
    Attribute::Luck,
    Attribute::Wisdom,
    Attribute::Willpower,
    Attribute::Vitality,
    Attribute::Perception,
    Attribute::Endurance,
    Attribute::Resistance,
    Attribute::Stamina,
    Attribute::Bravery,
];

/// Attribute scores as reals, read once per computation.
struct Scores {
    str: f64,
    agi: f64,
    dex: f64,
    luck: f64,
    wis: f64,
    will: f64,
    vit: f64,
    per: f64,
    end: f64,
    res: f64,
    sta: f64,
    bra: f64,
}

impl Scores {
    fn read(
        attributes: &AttributeSet,
        mut score: impl FnMut(&AttributeSet, Attribute) -> Result<i64, StatusError>,
    ) -> Result<Self, StatusError> {
        let mut get = |attribute| score(attributes, attribute).map(|value| value as f64);
        Ok(Self {
            str: get(Attribute::Strength)?,
            agi: get(Attribute::Agility)?,
            dex: get(Attribute::Dexterity)?,
            luck: get(Attribute::Luck)?,
            wis: get(Attribute::Wisdom)?,
            will: get(Attribute::Willpower)?,
            vit: get(Attribute::Vitality)?,
            per: get(Attribute::Perception)?,
            end: get(Attribute::Endurance)?,
            res: get(Attribute::Resistance)?,
            sta: get(Attribute::Stamina)?,
            bra: get(Attribute::Bravery)?,
        })
    }
}

/// Pure mapping from an [`AttributeSet`] to [`DerivedStats`].
pub struct StatCalculator;

impl StatCalculator {
    /// Computes derived stats from raw attributes.
    ///
    /// # Errors
    ///
    /// - `StatusError::FrozenMutation` if `attributes` is frozen: frozen data is
    ///   never recomputed.
    /// - `StatusError::TypeMismatch` if a formula input is not an integer.
    pub fn compute(attributes: &AttributeSet) -> Result<DerivedStats, StatusError> {
        if attributes.is_frozen() {
            return Err(StatusError::frozen("recompute derived stats"));
        }

        let scores = Scores::read(attributes, |set, attribute| {
            set.score(attribute)
                .ok_or_else(|| StatusError::TypeMismatch {
                    field: attribute.to_string(),
                    expected: FieldKind::Integer,
                    found: set.get(attribute).clone(),
                })
        })?;

        Ok(Self::formulas(&scores))
    }

    /// Recomputation for the character aggregate, whose attributes are
    /// validated integers by construction.
    pub(crate) fn recompute(attributes: &AttributeSet) -> DerivedStats {
        match Scores::read(attributes, |set, attribute| {
            Ok(set.score(attribute).unwrap_or_default())
        }) {
            Ok(scores) => Self::formulas(&scores),
            Err(_) => DerivedStats::unavailable(),
        }
    }

    fn formulas(s: &Scores) -> DerivedStats {
        let max_hit_point =
            ((s.vit * 10.0 + s.end * 3.0 + s.res * 2.0 + s.str * 1.4) / 15.0) * 10.0;
        let max_magical_point =
            Numeric::Value(((s.sta * 30.0 + s.will * 10.0 + s.wis * 3.0) / 10.0) * 1.3);

        let critical_percentage = (((s.str * 10.0 + s.sta * 5.0 + s.per * 1.2 + s.bra * 1.3 / 4.0)
            / 1.5)
            * 2.0
            / 100.0)
            + (s.luck / 3.0);
        let evade_percentage = ((s.agi * 40.0 + s.dex * 20.0) / 50.0) / 100.0;
        let speed_acceleration = (s.agi * 20.0 + s.dex * 10.0) / 400.0;

        let attack = (s.str * 60.0 + s.will * 1.5 + s.sta * 5.0) / 59.0;
        let defense = ((s.vit * 40.0 + s.end * 4.6 + s.res * 2.4 + s.str * 3.4) / 60.0) * 2.0;

        // Magical stats build on the magic pool
        let magical_defense = (max_magical_point + s.will * 10.0 + s.wis * 2.0) / 13.0;
        let magical_attack =
            (max_magical_point + s.will * 10.0 + s.wis * 2.0 + s.sta * 1.004) / 13.0;

        let stamina_point = s.sta * 10.0;
        let leadership_point = ((s.bra * 10.0 + s.wis * 2.0 + s.will * 1.3) / 12.0) * 1.2;

        DerivedStats {
            magical_attack,
            magical_defense,
            critical_percentage: critical_percentage.into(),
            evade_percentage: evade_percentage.into(),
            attack: attack.into(),
            defense: defense.into(),
            accuracy: Numeric::NotAvailable,
            speed_acceleration: speed_acceleration.into(),
            max_hit_point: max_hit_point.into(),
            max_magical_point,
            usage_acceleration: Numeric::NotAvailable,
            stamina_point: stamina_point.into(),
            resistance_point: Numeric::NotAvailable,
            leadership_point: leadership_point.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::schema::FieldSchema;
    use crate::value::Value;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: Numeric, expected: f64) {
        let value = actual.value().expect("stat should be available");
        assert!(
            (value - expected).abs() < EPS,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn uniform_tens() {
        let derived = StatCalculator::compute(&AttributeSet::uniform(10)).unwrap();

        assert_close(derived.max_hit_point, 164.0 / 15.0 * 10.0);
        assert_close(derived.max_magical_point, 43.0 * 1.3);
        assert_close(derived.critical_percentage, (165.25 / 1.5) * 2.0 / 100.0 + 10.0 / 3.0);
        assert_close(derived.evade_percentage, 0.12);
        assert_close(derived.speed_acceleration, 0.75);
        assert_close(derived.attack, 665.0 / 59.0);
        assert_close(derived.defense, 16.8);
        assert_close(derived.magical_defense, (55.9 + 100.0 + 20.0) / 13.0);
        assert_close(derived.magical_attack, (55.9 + 100.0 + 20.0 + 10.04) / 13.0);
        assert_close(derived.stamina_point, 100.0);
        assert_close(derived.leadership_point, 133.0 / 12.0 * 1.2);
    }

    #[test]
    fn unmodeled_stats_are_not_available() {
        let derived = StatCalculator::compute(&AttributeSet::uniform(7)).unwrap();
        assert_eq!(derived.accuracy, Numeric::NotAvailable);
        assert_eq!(derived.resistance_point, Numeric::NotAvailable);
        assert_eq!(derived.usage_acceleration, Numeric::NotAvailable);
    }

    #[test]
    fn compute_is_deterministic() {
        let attributes = AttributeSet::uniform(13)
            .with(Attribute::Luck, Value::Int(2))
            .with(Attribute::Bravery, Value::Int(31));

        let first = StatCalculator::compute(&attributes).unwrap();
        let second = StatCalculator::compute(&attributes.clone()).unwrap();
        assert!(first.approx_eq(&second, EPS));
    }

    #[test]
    fn frozen_attributes_are_never_recomputed() {
        let frozen = AttributeSet::uniform(10).to_frozen();
        let err = StatCalculator::compute(&frozen).unwrap_err();
        assert!(matches!(err, StatusError::FrozenMutation { .. }));
    }

    #[test]
    fn non_integer_input_is_a_type_mismatch() {
        let attributes = AttributeSet::uniform(10).with(Attribute::Stamina, Value::Float(1.5));
        match StatCalculator::compute(&attributes).unwrap_err() {
            StatusError::TypeMismatch { field, .. } => assert_eq!(field, "Sta"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn formula_inputs_match_declared_attributes() {
        let base = StatCalculator::compute(&AttributeSet::uniform(10)).unwrap();

        for attribute in Attribute::iter() {
            assert_eq!(Attribute::from_key(attribute.key()), Some(attribute));

            let bumped = AttributeSet::uniform(10).with(attribute, Value::Int(20));
            let derived = StatCalculator::compute(&bumped).unwrap();
            let changed = !derived.approx_eq(&base, EPS);

            assert_eq!(
                changed,
                FORMULA_INPUTS.contains(&attribute),
                "{attribute} influence does not match FORMULA_INPUTS"
            );
        }
    }
}
