//! Percentage values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// A fraction where `1.0` represents 100%.
///
/// The readable 0–100 form is reached only through [`Percent::from_points`]
/// and [`Percent::as_points`].
///
/// # Example
///
/// ```rust
/// use folio_core::Percent;
///
/// let p = Percent::from_points(12.5);
/// assert_eq!(p.value(), 0.125);
/// assert_eq!(p.to_string(), "12.5%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(f64);

impl Percent {
    /// 0%.
    pub const ZERO: Percent = Percent(0.0);

    /// 100%.
    pub const HUNDRED: Percent = Percent(1.0);

    /// Creates a percent from a fraction (`0.25` is 25%).
    #[must_use]
    pub const fn new(fraction: f64) -> Self {
        Self(fraction)
    }

    /// Creates a percent from percentage points (`25.0` is 25%).
    #[must_use]
    pub fn from_points(points: f64) -> Self {
        Self(points / 100.0)
    }

    /// Returns the fraction.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns percentage points (`0.25` becomes `25.0`).
    #[must_use]
    pub fn as_points(self) -> f64 {
        self.0 * 100.0
    }

    /// Returns true if the value is finite and within `[0, 1]`.
    #[must_use]
    pub fn is_allocation(self) -> bool {
        self.0.is_finite() && (0.0..=1.0).contains(&self.0)
    }
}

impl From<f64> for Percent {
    fn from(fraction: f64) -> Self {
        Self(fraction)
    }
}

impl From<Percent> for f64 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

impl Add for Percent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Percent {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Percent {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<f64> for Percent {
    type Output = f64;

    fn mul(self, rhs: f64) -> f64 {
        self.0 * rhs
    }
}

impl Sum for Percent {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}

impl<'a> Sum<&'a Percent> for Percent {
    fn sum<I: Iterator<Item = &'a Percent>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}

/// Fixed-point percentage with up to 12 fractional digits, trailing zeros
/// and a trailing decimal point trimmed.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = format!("{:.12}", self.as_points());
        if s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(trimmed);
        }
        if s == "-0" {
            s = "0".to_string();
        }
        write!(f, "{s}%")
    }
}
