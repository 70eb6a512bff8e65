//! The rational value type.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::pair::{Pair, take_fields};
use crate::error::{RosterError, RosterResult};

/// A rational number as a raw numerator/denominator pair.
///
/// No invariant is enforced: the denominator may be zero and results are
/// never reduced to lowest terms, so denominators grow without bound under
/// repeated arithmetic. Addition and subtraction cross-multiply to a common
/// denominator.
///
/// Scaling multiplies the numerator by the scalar truncated to an integer.
/// Division multiplies the *denominator* by the scalar truncated to an
/// integer — asymmetric with scaling and not textbook fraction division; this
/// mirrors the program these types replace.
///
/// # Examples
///
/// ```
/// use staff_roster::values::Fraction;
///
/// assert_eq!(Fraction::new(1, 2) + Fraction::new(3, 4), Fraction::new(10, 8));
/// assert_eq!(Fraction::new(1, 2) - Fraction::new(3, 4), Fraction::new(-2, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    /// The numerator.
    pub numerator: i64,
    /// The denominator.
    pub denominator: i64,
}

impl Fraction {
    /// Creates a new fraction. The pair is stored as given: nothing is
    /// reduced and a zero denominator is accepted.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Fraction) -> Fraction {
        Fraction::new(
            self.numerator * other.denominator - other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl Mul<f64> for Fraction {
    type Output = Fraction;

    fn mul(self, scalar: f64) -> Fraction {
        Fraction::new((self.numerator as f64 * scalar) as i64, self.denominator)
    }
}

impl Div<f64> for Fraction {
    type Output = Fraction;

    fn div(self, scalar: f64) -> Fraction {
        Fraction::new(self.numerator, (self.denominator as f64 * scalar) as i64)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Pair for Fraction {
    const TAG: &'static str = "Fraction";
    const FIELDS: &'static [&'static str] = &["numerator", "denominator"];

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("numerator", self.numerator.to_string()),
            ("denominator", self.denominator.to_string()),
        ]
    }

    fn from_fields(fields: &[(String, String)]) -> RosterResult<Self> {
        let texts = take_fields(Self::TAG, Self::FIELDS, fields)?;
        let numerator = texts[0].parse().map_err(|_| RosterError::InvalidNumber {
            field: "numerator",
            text: texts[0].clone(),
        })?;
        let denominator = texts[1].parse().map_err(|_| RosterError::InvalidNumber {
            field: "denominator",
            text: texts[1].clone(),
        })?;
        Ok(Fraction::new(numerator, denominator))
    }
}
