//! The character aggregate: raw records, derived stats and progression.
//!
//! A character is `Active` until [`Character::freeze`] is called, after which
//! it is `Frozen` for good. Progression on a frozen character is a no-op
//! reported as [`Progress::Frozen`], never an error.

mod builder;
mod snapshot;

pub use builder::CharacterBuilder;
pub use snapshot::Snapshot;

use strum::IntoEnumIterator;

use crate::config::StatusConfig;
use crate::error::StatusError;
use crate::progression::{Threshold, Track, max_experience};
use crate::rng::RngOracle;
use crate::stats::{
    Attribute, AttributeSet, CharacterMeta, DerivedStat, DerivedStats, FieldSchema, MetaField,
    StatCalculator,
};
use crate::value::{Record, Value};

/// Lifecycle state of a [`Character`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterState {
    Active,
    Frozen,
}

/// Outcome of a progression call.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The call was applied; `levels_gained` may be zero.
    Applied { levels_gained: u32 },
    /// The character is frozen and nothing changed.
    Frozen,
}

impl Progress {
    pub const fn levels_gained(self) -> u32 {
        match self {
            Progress::Applied { levels_gained } => levels_gained,
            Progress::Frozen => 0,
        }
    }

    pub const fn is_frozen(self) -> bool {
        matches!(self, Progress::Frozen)
    }
}

/// Experience needed for the next level on each track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    general: Threshold,
    magical: Threshold,
    magical_skill: Threshold,
}

impl Thresholds {
    const MAX: Self = Self {
        general: Threshold::Max,
        magical: Threshold::Max,
        magical_skill: Threshold::Max,
    };

    fn roll<R>(meta: &CharacterMeta, rng: &mut R) -> Self
    where
        R: RngOracle + ?Sized,
    {
        let mut thresholds = Self::MAX;
        for track in Track::iter() {
            let level = meta.int(track.level_field()).unwrap_or_default();
            thresholds.set(track, max_experience(level, track, rng));
        }
        thresholds
    }

    pub const fn get(&self, track: Track) -> Threshold {
        match track {
            Track::General => self.general,
            Track::Magical => self.magical,
            Track::MagicalSkill => self.magical_skill,
        }
    }

    fn set(&mut self, track: Track, threshold: Threshold) {
        match track {
            Track::General => self.general = threshold,
            Track::Magical => self.magical = threshold,
            Track::MagicalSkill => self.magical_skill = threshold,
        }
    }
}

/// A validated character.
///
/// Construct with [`CharacterBuilder`], [`Character::from_record`] or
/// [`Character::from_snapshot`].
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    attributes: AttributeSet,
    meta: CharacterMeta,
    derived: DerivedStats,
    thresholds: Thresholds,
    state: CharacterState,
    config: StatusConfig,
}

impl Character {
    /// Builds a character from one flat mapping of attribute and meta keys.
    ///
    /// Keys that are neither are ignored. Schema keys absent from `record`
    /// start out not available and go through validation like any other
    /// field.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::StaticTyping` if the records fail validation.
    pub fn from_record<R>(
        record: &Record,
        config: StatusConfig,
        rng: &mut R,
    ) -> Result<Self, StatusError>
    where
        R: RngOracle + ?Sized,
    {
        for key in record.keys() {
            if Attribute::from_key(key).is_some() || MetaField::from_key(key).is_some() {
                continue;
            }
            if DerivedStat::iter().any(|stat| stat.key() == key) {
                tracing::debug!("ignoring derived stat {key}: recomputed on build");
            } else {
                tracing::warn!("ignoring unknown character field {key}");
            }
        }

        CharacterBuilder::new(
            CharacterMeta::from_record(record),
            AttributeSet::from_record(record),
        )
        .config(config)
        .build(rng)
    }

    /// A frozen character wrapping a snapshot's records as-is.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let (mut attributes, mut meta, derived) = snapshot.into_parts();
        attributes.freeze();
        meta.freeze();

        Self {
            attributes,
            meta,
            derived,
            thresholds: Thresholds::MAX,
            state: CharacterState::Frozen,
            config: StatusConfig::default(),
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

    pub const fn state(&self) -> CharacterState {
        self.state
    }

    pub const fn is_frozen(&self) -> bool {
        matches!(self.state, CharacterState::Frozen)
    }

    pub const fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Experience needed for the next level on `track`.
    pub const fn threshold(&self, track: Track) -> Threshold {
        self.thresholds.get(track)
    }

    /// Current level on `track`.
    pub fn track_level(&self, track: Track) -> i64 {
        self.meta.int(track.level_field()).unwrap_or_default()
    }

    /// Current experience on `track`.
    pub fn track_experience(&self, track: Track) -> i64 {
        self.meta.int(track.experience_field()).unwrap_or_default()
    }

    /// Advances one general level, resetting `EXP` to zero.
    ///
    /// Each growth attribute gains a roll in `[growth_min, growth_max]`, then
    /// the general threshold and every derived stat are recomputed.
    pub fn level_up<R>(&mut self, rng: &mut R) -> Progress
    where
        R: RngOracle + ?Sized,
    {
        if self.is_frozen() {
            tracing::debug!("level_up ignored: character is frozen");
            return Progress::Frozen;
        }

        self.meta.write(MetaField::Experience, Value::Int(0));
        self.advance(Track::General, rng);
        Progress::Applied { levels_gained: 1 }
    }

    /// Adds general experience, levelling up as many times as it allows.
    ///
    /// After each level the threshold is rerolled for the new level before
    /// the remainder is checked again.
    pub fn gain_experience<R>(&mut self, amount: u32, rng: &mut R) -> Progress
    where
        R: RngOracle + ?Sized,
    {
        self.gain_track_experience(Track::General, amount, rng)
    }

    /// Adds experience on any track.
    ///
    /// Magical tracks level without attribute growth. A `Max` threshold is
    /// never reached, so experience keeps accumulating at the cap.
    pub fn gain_track_experience<R>(&mut self, track: Track, amount: u32, rng: &mut R) -> Progress
    where
        R: RngOracle + ?Sized,
    {
        if self.is_frozen() {
            tracing::debug!("{track} experience ignored: character is frozen");
            return Progress::Frozen;
        }

        let exp_field = track.experience_field();
        self.meta.add(exp_field, i64::from(amount));

        let mut levels_gained = 0;
        loop {
            let experience = self.track_experience(track);
            let needed = match self.thresholds.get(track) {
                Threshold::Exp(needed) if experience >= needed => needed,
                _ => break,
            };
            self.meta.write(exp_field, Value::Int(experience - needed));
            self.advance(track, rng);
            levels_gained += 1;
        }

        Progress::Applied { levels_gained }
    }

    /// One-way transition to `Frozen`; freezes both raw records.
    pub fn freeze(&mut self) {
        self.attributes.freeze();
        self.meta.freeze();
        self.state = CharacterState::Frozen;
    }

    /// Recomputes derived stats from the current attributes.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::FrozenMutation` on a frozen character.
    pub fn refresh_derived(&mut self) -> Result<(), StatusError> {
        self.derived = StatCalculator::compute(&self.attributes)?;
        Ok(())
    }

    /// Frozen copy of the three records. `self` is unchanged.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.attributes, &self.meta, &self.derived)
    }

    /// Meta and attributes flattened into one mapping.
    pub fn serialize(&self) -> Record {
        let mut record = self.meta.to_record();
        record.extend(self.attributes.to_record());
        record
    }

    /// Meta, attributes and derived stats as three mappings.
    pub fn serialize_full(&self) -> (Record, Record, Record) {
        (
            self.meta.to_record(),
            self.attributes.to_record(),
            self.derived.to_record(),
        )
    }

    fn advance<R>(&mut self, track: Track, rng: &mut R)
    where
        R: RngOracle + ?Sized,
    {
        self.meta.add(track.level_field(), 1);
        if track == Track::General {
            for attribute in Attribute::GROWTH {
                let gain = rng.randint(self.config.growth_min, self.config.growth_max);
                self.attributes.add(attribute, gain);
            }
            self.derived = StatCalculator::recompute(&self.attributes);
        }

        let level = self.track_level(track);
        let threshold = max_experience(level, track, rng);
        self.thresholds.set(track, threshold);
        tracing::debug!(
            "{:?} reached {track} level {level}, next at {threshold}",
            self.meta.name().unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{LowerBoundRng, PcgRng};
    use crate::stats::Numeric;

    fn hero() -> Character {
        let meta = CharacterMeta::named("Debug #0", "DebugRace");
        CharacterBuilder::new(meta, AttributeSet::uniform(10))
            .build(&mut LowerBoundRng)
            .unwrap()
    }

    #[test]
    fn builds_with_derived_stats_and_thresholds() {
        let hero = hero();
        assert_eq!(hero.state(), CharacterState::Active);
        assert!(hero.derived().max_hit_point.is_available());
        assert_eq!(hero.threshold(Track::General), Threshold::Exp(46));
        assert_eq!(hero.threshold(Track::Magical), Threshold::Exp(3400));
        assert_eq!(hero.threshold(Track::MagicalSkill), Threshold::Exp(30));
    }

    #[test]
    fn invalid_records_fail_with_combined_reason() {
        let meta =
            CharacterMeta::named("Debug #0", "DebugRace").with(MetaField::Gender, Value::Int(7));
        let attributes = AttributeSet::uniform(10).with(Attribute::Agility, "fast");

        let err = CharacterBuilder::new(meta, attributes)
            .build(&mut LowerBoundRng)
            .unwrap_err();
        let reason = match err {
            StatusError::StaticTyping { reason } => reason,
            other => panic!("expected StaticTyping, got {other:?}"),
        };
        assert!(reason.contains("Agi"));
        assert!(reason.contains("Gender"));
    }

    #[test]
    fn not_available_name_is_rejected_after_repair() {
        let meta =
            CharacterMeta::named("x", "DebugRace").with(MetaField::Name, Value::NotAvailable);
        let err = CharacterBuilder::new(meta, AttributeSet::uniform(10))
            .build(&mut LowerBoundRng)
            .unwrap_err();
        assert!(matches!(err, StatusError::StaticTyping { .. }));
    }

    #[test]
    fn level_up_grows_attributes_except_innate_ones() {
        let mut hero = hero();
        let before = hero.derived().clone();

        let progress = hero.level_up(&mut LowerBoundRng);

        assert_eq!(progress, Progress::Applied { levels_gained: 1 });
        assert_eq!(hero.meta().level(), Some(2));
        assert_eq!(hero.meta().experience(), Some(0));
        for attribute in Attribute::iter() {
            let expected = if attribute.grows_on_level_up() { 11 } else { 10 };
            assert_eq!(hero.attributes().score(attribute), Some(expected), "{attribute}");
        }
        assert_eq!(hero.threshold(Track::General), Threshold::Exp(184));
        assert!(!hero.derived().approx_eq(&before, 1e-9));
    }

    #[test]
    fn level_up_resets_experience() {
        let mut hero = hero();
        let _ = hero.gain_experience(20, &mut LowerBoundRng);
        assert_eq!(hero.meta().experience(), Some(20));

        let _ = hero.level_up(&mut PcgRng::new(1));
        assert_eq!(hero.meta().experience(), Some(0));
        for attribute in Attribute::GROWTH {
            let score = hero.attributes().score(attribute).unwrap();
            assert!((11..=15).contains(&score));
        }
    }

    #[test]
    fn gain_experience_handles_several_levels() {
        let mut hero = hero();
        let progress = hero.gain_experience(46 + 184 + 5, &mut LowerBoundRng);

        assert_eq!(progress.levels_gained(), 2);
        assert_eq!(hero.meta().level(), Some(3));
        assert_eq!(hero.meta().experience(), Some(5));
        assert_eq!(hero.threshold(Track::General), Threshold::Exp(414));
        assert_eq!(hero.attributes().score(Attribute::Strength), Some(12));
        assert_eq!(hero.attributes().score(Attribute::Luck), Some(10));
    }

    #[test]
    fn gain_experience_below_threshold_only_accumulates() {
        let mut hero = hero();
        let progress = hero.gain_experience(45, &mut LowerBoundRng);

        assert_eq!(progress, Progress::Applied { levels_gained: 0 });
        assert_eq!(hero.meta().level(), Some(1));
        assert_eq!(hero.meta().experience(), Some(45));
    }

    #[test]
    fn magical_track_stops_at_cap() {
        let mut hero = hero();
        let total = (1..5).map(|level| level * 200 * 17 * level).sum::<i64>();
        let progress = hero.gain_track_experience(
            Track::Magical,
            u32::try_from(total + 10).unwrap(),
            &mut LowerBoundRng,
        );

        assert_eq!(progress.levels_gained(), 4);
        assert_eq!(hero.track_level(Track::Magical), 5);
        assert_eq!(hero.track_experience(Track::Magical), 10);
        assert!(hero.threshold(Track::Magical).is_max());
        assert_eq!(hero.attributes().score(Attribute::Strength), Some(10));
        assert_eq!(hero.meta().level(), Some(1));

        let progress = hero.gain_track_experience(Track::Magical, 1_000_000, &mut LowerBoundRng);
        assert_eq!(progress.levels_gained(), 0);
        assert_eq!(hero.track_level(Track::Magical), 5);
    }

    #[test]
    fn frozen_character_ignores_progression() {
        let mut hero = hero();
        hero.freeze();
        let before = hero.clone();

        assert_eq!(hero.level_up(&mut PcgRng::new(5)), Progress::Frozen);
        assert_eq!(hero.gain_experience(10_000, &mut PcgRng::new(5)), Progress::Frozen);
        let result = hero.gain_track_experience(Track::MagicalSkill, 10, &mut LowerBoundRng);
        assert!(result.is_frozen());
        assert_eq!(hero, before);
    }

    #[test]
    fn frozen_character_cannot_refresh_derived() {
        let mut hero = hero();
        assert!(hero.refresh_derived().is_ok());

        hero.freeze();
        let err = hero.refresh_derived().unwrap_err();
        assert!(matches!(err, StatusError::FrozenMutation { .. }));
    }

    #[test]
    fn frozen_records_build_a_frozen_character() {
        let hero = CharacterBuilder::new(
            CharacterMeta::named("Debug #0", "DebugRace"),
            AttributeSet::uniform(10).to_frozen(),
        )
        .build(&mut LowerBoundRng)
        .unwrap();

        assert!(hero.is_frozen());
        assert!(hero.meta().is_frozen());
        assert!(hero.derived().iter().all(|(_, value)| value == Numeric::NotAvailable));
        assert!(hero.threshold(Track::General).is_max());
    }

    #[test]
    fn snapshot_is_detached_from_the_character() {
        let mut hero = hero();
        let snapshot = hero.snapshot();

        assert!(snapshot.attributes().is_frozen());
        assert!(snapshot.meta().is_frozen());
        assert!(!hero.is_frozen());

        let _ = hero.level_up(&mut LowerBoundRng);
        assert_eq!(snapshot.meta().level(), Some(1));
        assert_eq!(snapshot.attributes().score(Attribute::Strength), Some(10));

        let restored = Character::from_snapshot(snapshot.clone());
        assert!(restored.is_frozen());
        assert_eq!(restored.derived(), snapshot.derived());
        assert_eq!(restored.serialize(), snapshot.to_record());
    }

    #[test]
    fn serialize_round_trip_is_idempotent() {
        let mut hero = hero();
        let _ = hero.gain_experience(300, &mut PcgRng::new(9));

        let once = hero.serialize();
        let rebuilt =
            Character::from_record(&once, StatusConfig::default(), &mut PcgRng::new(2)).unwrap();
        assert_eq!(rebuilt.serialize(), once);
        assert!(rebuilt.derived().approx_eq(hero.derived(), 1e-9));
    }

    #[test]
    fn from_record_ignores_unknown_and_repairs_missing() {
        let mut record = hero().serialize();
        record.insert("Atk".into(), Value::Float(1.0));
        record.insert("Favourite_Colour".into(), Value::from("green"));
        record.remove("Age");

        let hero =
            Character::from_record(&record, StatusConfig::default(), &mut LowerBoundRng).unwrap();
        let serialized = hero.serialize();

        assert_eq!(serialized.get("Age"), Some(&Value::Int(0)));
        assert!(!serialized.contains_key("Favourite_Colour"));
        assert!(!serialized.contains_key("Atk"));
    }

    #[test]
    fn strict_config_rejects_missing_fields() {
        let mut record = hero().serialize();
        record.remove("Luck");

        let err = Character::from_record(&record, StatusConfig::strict(), &mut LowerBoundRng)
            .unwrap_err();
        assert!(matches!(err, StatusError::StaticTyping { .. }));
    }

    #[test]
    fn serialize_full_splits_three_records() {
        let (meta, attributes, derived) = hero().serialize_full();
        assert_eq!(meta.len(), 11);
        assert_eq!(attributes.len(), 13);
        assert_eq!(derived.len(), 14);
        assert_eq!(derived.get("Accuracy"), Some(&Value::NotAvailable));
    }
}
