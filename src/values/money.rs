//! The monetary value type.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::pair::{Pair, take_fields};
use crate::error::{RosterError, RosterResult};

/// A monetary amount.
///
/// The amount is a plain `f64` with no currency, rounding policy or overflow
/// handling. Addition and subtraction take another `Money`; scaling and
/// division take any real scalar.
///
/// # Examples
///
/// ```
/// use staff_roster::values::Money;
///
/// assert_eq!(Money::new(100.0) + Money::new(50.0), Money::new(150.0));
/// assert_eq!(Money::new(100.0) * 2.0, Money::new(200.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    /// The amount.
    pub amount: f64,
}

impl Money {
    /// Creates a new monetary amount.
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount + other.amount)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount - other.amount)
    }
}

impl Mul<f64> for Money {
    type Output = Money;

    fn mul(self, scalar: f64) -> Money {
        Money::new(self.amount * scalar)
    }
}

impl Div<f64> for Money {
    type Output = Money;

    fn div(self, scalar: f64) -> Money {
        Money::new(self.amount / scalar)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}

impl Pair for Money {
    const TAG: &'static str = "Money";
    const FIELDS: &'static [&'static str] = &["amount"];

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("amount", self.amount.to_string())]
    }

    fn from_fields(fields: &[(String, String)]) -> RosterResult<Self> {
        let texts = take_fields(Self::TAG, Self::FIELDS, fields)?;
        let amount = texts[0].parse().map_err(|_| RosterError::InvalidNumber {
            field: "amount",
            text: texts[0].clone(),
        })?;
        Ok(Money::new(amount))
    }
}
