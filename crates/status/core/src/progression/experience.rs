//! Experience thresholds for the three progression tracks.
//!
//! Formulas (`rng(a, b)` is inclusive on both ends):
//! - General: `level × 46 × level + rng(0, 30)`
//! - Magical: `Max` at level 5 and from level 10;
//!   else `level × 200 × 17 × level + rng(0, 100)`
//! - MagicalSkill: `Max` from level 10; else `level × 30 × level + rng(0, 60)`

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::error::StatusError;
use crate::rng::RngOracle;
use crate::stats::MetaField;

/// A progression ladder, each with its own level, EXP and threshold.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Track {
    General,
    Magical,
    MagicalSkill,
}

impl Track {
    pub const fn level_field(self) -> MetaField {
        match self {
            Track::General => MetaField::Level,
            Track::Magical => MetaField::MagicalLevel,
            Track::MagicalSkill => MetaField::MagicalSkillLevel,
        }
    }

    pub const fn experience_field(self) -> MetaField {
        match self {
            Track::General => MetaField::Experience,
            Track::Magical => MetaField::MagicalExperience,
            Track::MagicalSkill => MetaField::MagicalSkillExperience,
        }
    }
}

impl FromStr for Track {
    type Err = StatusError;

    /// Parses `general`, `magical` or `magical_skill` (case-insensitive,
    /// `-` accepted for `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "general" => Ok(Track::General),
            "magical" => Ok(Track::Magical),
            "magical_skill" => Ok(Track::MagicalSkill),
            _ => Err(StatusError::InvalidArgument(format!(
                "unknown progression track `{s}`"
            ))),
        }
    }
}

/// Experience needed for the next level: a finite amount or `Max`.
///
/// `Max` means the track is capped at this level. It is absorbing: any
/// arithmetic with it yields `Max`, and no amount of experience reaches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Threshold {
    Exp(i64),
    Max,
}

impl Threshold {
    pub const fn value(self) -> Option<i64> {
        match self {
            Threshold::Exp(value) => Some(value),
            Threshold::Max => None,
        }
    }

    pub const fn is_max(self) -> bool {
        matches!(self, Threshold::Max)
    }

    /// Whether `experience` is enough to level up.
    pub const fn is_reached_by(self, experience: i64) -> bool {
        match self {
            Threshold::Exp(value) => experience >= value,
            Threshold::Max => false,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Exp(value) => write!(f, "{value}"),
            Threshold::Max => f.write_str("MAX"),
        }
    }
}

/// Integer operands saturate. Division by zero and `i64::MIN / -1` have no
/// finite answer and give `Max`.
macro_rules! threshold_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait<i64> for Threshold {
            type Output = Threshold;

            fn $method(self, rhs: i64) -> Threshold {
                match self {
                    Threshold::Exp(value) => Threshold::Exp(value.$op(rhs)),
                    Threshold::Max => Threshold::Max,
                }
            }
        }
    };
}

threshold_op!(Add, add, saturating_add);
threshold_op!(Sub, sub, saturating_sub);
threshold_op!(Mul, mul, saturating_mul);

impl Div<i64> for Threshold {
    type Output = Threshold;

    fn div(self, rhs: i64) -> Threshold {
        match self {
            Threshold::Exp(value) => value.checked_div(rhs).map_or(Threshold::Max, Threshold::Exp),
            Threshold::Max => Threshold::Max,
        }
    }
}

/// Float operands, for scaling a threshold by a rate. The result is rounded
/// to the nearest whole amount; a non-finite result is `Max` and anything
/// past the `i64` range saturates.
macro_rules! threshold_float_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for Threshold {
            type Output = Threshold;

            fn $method(self, rhs: f64) -> Threshold {
                match self {
                    Threshold::Exp(value) => from_float(value as f64 $op rhs),
                    Threshold::Max => Threshold::Max,
                }
            }
        }
    };
}

threshold_float_op!(Add, add, +);
threshold_float_op!(Sub, sub, -);
threshold_float_op!(Mul, mul, *);
threshold_float_op!(Div, div, /);

fn from_float(value: f64) -> Threshold {
    if value.is_finite() {
        Threshold::Exp(value.round() as i64)
    } else {
        Threshold::Max
    }
}

/// Experience needed to advance from `level` on `track`.
pub fn max_experience<R>(level: i64, track: Track, rng: &mut R) -> Threshold
where
    R: RngOracle + ?Sized,
{
    match track {
        Track::General => Threshold::Exp(quadratic(level, 46)) + rng.randint(0, 30),
        Track::Magical if level == 5 || level >= 10 => Threshold::Max,
        Track::Magical => Threshold::Exp(quadratic(level, 200 * 17)) + rng.randint(0, 100),
        Track::MagicalSkill if level >= 10 => Threshold::Max,
        Track::MagicalSkill => Threshold::Exp(quadratic(level, 30)) + rng.randint(0, 60),
    }
}

/// `level × factor × level`, saturating for absurd levels read from files.
fn quadratic(level: i64, factor: i64) -> i64 {
    level.saturating_mul(factor).saturating_mul(level)
}

/// [`max_experience`] with the track given by name.
///
/// # Errors
///
/// Returns `StatusError::InvalidArgument` for an unknown track name.
pub fn max_experience_by_name<R>(
    level: i64,
    track: &str,
    rng: &mut R,
) -> Result<Threshold, StatusError>
where
    R: RngOracle + ?Sized,
{
    let track = track.parse::<Track>()?;
    Ok(max_experience(level, track, rng))
}
