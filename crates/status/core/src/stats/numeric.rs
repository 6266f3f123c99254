//! Numeric values for derived stats.
//!
//! A derived stat is either a finite real number or [`Numeric::NotAvailable`],
//! the marker for stats that are intentionally left unmodeled. The marker is
//! absorbing: any arithmetic touching it yields `NotAvailable`.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Numeric {
    Value(f64),
    NotAvailable,
}

impl Numeric {
    pub const fn value(self) -> Option<f64> {
        match self {
            Numeric::Value(value) => Some(value),
            Numeric::NotAvailable => None,
        }
    }

    pub const fn is_available(self) -> bool {
        matches!(self, Numeric::Value(_))
    }

    /// Equality within `tolerance`. Two `NotAvailable` markers are equal.
    pub fn approx_eq(self, other: Numeric, tolerance: f64) -> bool {
        match (self, other) {
            (Numeric::Value(a), Numeric::Value(b)) => (a - b).abs() <= tolerance,
            (Numeric::NotAvailable, Numeric::NotAvailable) => true,
            _ => false,
        }
    }

    fn zip(self, rhs: Numeric, op: impl FnOnce(f64, f64) -> f64) -> Numeric {
        match (self, rhs) {
            (Numeric::Value(a), Numeric::Value(b)) => Numeric::Value(op(a, b)),
            _ => Numeric::NotAvailable,
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Value(value)
    }
}

impl From<Numeric> for Value {
    fn from(numeric: Numeric) -> Self {
        match numeric {
            Numeric::Value(value) => Value::Float(value),
            Numeric::NotAvailable => Value::NotAvailable,
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Value(value) => match f.precision() {
                Some(precision) => write!(f, "{value:.precision$}"),
                None => write!(f, "{value}"),
            },
            Numeric::NotAvailable => f.write_str("N/A"),
        }
    }
}

macro_rules! numeric_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Numeric {
            type Output = Numeric;

            fn $method(self, rhs: Numeric) -> Numeric {
                self.zip(rhs, |a, b| a $op b)
            }
        }

        impl $trait<f64> for Numeric {
            type Output = Numeric;

            fn $method(self, rhs: f64) -> Numeric {
                self.zip(Numeric::Value(rhs), |a, b| a $op b)
            }
        }

        impl $trait<Numeric> for f64 {
            type Output = Numeric;

            fn $method(self, rhs: Numeric) -> Numeric {
                Numeric::Value(self).zip(rhs, |a, b| a $op b)
            }
        }
    };
}

numeric_op!(Add, add, +);
numeric_op!(Sub, sub, -);
numeric_op!(Mul, mul, *);
numeric_op!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_available_absorbs_arithmetic() {
        let na = Numeric::NotAvailable;
        assert_eq!(na + 1.0, na);
        assert_eq!(na - Numeric::Value(2.0), na);
        assert_eq!(3.0 * na, na);
        assert_eq!(Numeric::Value(4.0) / na, na);
    }

    #[test]
    fn values_combine_normally() {
        let sum = Numeric::Value(1.5) + Numeric::Value(2.5);
        assert_eq!(sum, Numeric::Value(4.0));
        assert_eq!((sum / 2.0).value(), Some(2.0));
    }

    #[test]
    fn not_available_is_distinct_from_zero() {
        assert_ne!(Numeric::NotAvailable, Numeric::Value(0.0));
        assert!(!Numeric::NotAvailable.approx_eq(Numeric::Value(0.0), 1.0));
        assert_eq!(Value::from(Numeric::NotAvailable), Value::NotAvailable);
        assert_eq!(format!("{:.2}", Numeric::Value(1.0 / 3.0)), "0.33");
    }
}
