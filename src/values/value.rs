//! The closed tagged union over the value types.

use std::fmt;

use super::fraction::Fraction;
use super::money::Money;
use super::pair::{Pair, decode_fragment};
use crate::error::{RosterError, RosterResult};

/// A value that is either a [`Money`] or a [`Fraction`].
///
/// Arithmetic between two `Value`s matches the variant tags explicitly and
/// fails fast with [`RosterError::OperandMismatch`] when they differ; the
/// operands are left unchanged. Scaling and division by a scalar apply to
/// either variant.
///
/// # Examples
///
/// ```
/// use staff_roster::values::{Money, Fraction, Value};
///
/// let money = Value::Money(Money::new(100.0));
/// let fraction = Value::Fraction(Fraction::new(1, 2));
///
/// assert!(money.add(&Value::Money(Money::new(50.0))).is_ok());
/// assert!(money.add(&fraction).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A monetary amount.
    Money(Money),
    /// A rational number.
    Fraction(Fraction),
}

impl Value {
    /// Returns the variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Money(_) => Money::TAG,
            Value::Fraction(_) => Fraction::TAG,
        }
    }

    /// Adds two values of the same variant.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::OperandMismatch`] when the variants differ.
    pub fn add(&self, other: &Value) -> RosterResult<Value> {
        match (self, other) {
            (Value::Money(a), Value::Money(b)) => Ok(Value::Money(*a + *b)),
            (Value::Fraction(a), Value::Fraction(b)) => Ok(Value::Fraction(*a + *b)),
            _ => Err(RosterError::OperandMismatch {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }

    /// Subtracts two values of the same variant.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::OperandMismatch`] when the variants differ.
    pub fn sub(&self, other: &Value) -> RosterResult<Value> {
        match (self, other) {
            (Value::Money(a), Value::Money(b)) => Ok(Value::Money(*a - *b)),
            (Value::Fraction(a), Value::Fraction(b)) => Ok(Value::Fraction(*a - *b)),
            _ => Err(RosterError::OperandMismatch {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }

    /// Scales the value by a real scalar.
    pub fn scale(&self, scalar: f64) -> Value {
        match self {
            Value::Money(m) => Value::Money(*m * scalar),
            Value::Fraction(fr) => Value::Fraction(*fr * scalar),
        }
    }

    /// Divides the value by a real scalar.
    pub fn divide_by(&self, scalar: f64) -> Value {
        match self {
            Value::Money(m) => Value::Money(*m / scalar),
            Value::Fraction(fr) => Value::Fraction(*fr / scalar),
        }
    }

    /// Encodes the value as an XML fragment tagged with the variant name.
    pub fn to_xml(&self) -> String {
        match self {
            Value::Money(m) => m.to_xml(),
            Value::Fraction(fr) => fr.to_xml(),
        }
    }

    /// Decodes a value from an XML fragment, dispatching on the root tag.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ValueDecode`] when the root tag names no known
    /// variant or the fields do not match the variant exactly.
    pub fn from_xml(xml: &str) -> RosterResult<Value> {
        let (root, fields) = decode_fragment(xml)?;
        match root.as_str() {
            t if t == Money::TAG => Ok(Value::Money(Money::from_fields(&fields)?)),
            t if t == Fraction::TAG => Ok(Value::Fraction(Fraction::from_fields(&fields)?)),
            other => Err(RosterError::ValueDecode {
                expected: "Money or Fraction",
                message: format!("unknown variant tag '{}'", other),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Money(m) => m.fmt(f),
            Value::Fraction(fr) => fr.fmt(f),
        }
    }
}

impl From<Money> for Value {
    fn from(money: Money) -> Self {
        Value::Money(money)
    }
}

impl From<Fraction> for Value {
    fn from(fraction: Fraction) -> Self {
        Value::Fraction(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_same_variant() {
        let sum = Value::Money(Money::new(100.0))
            .add(&Value::Money(Money::new(50.0)))
            .unwrap();
        assert_eq!(sum, Value::Money(Money::new(150.0)));
    }

    #[test]
    fn test_add_mismatched_variants_fails() {
        let money = Value::Money(Money::new(100.0));
        let fraction = Value::Fraction(Fraction::new(1, 2));

        let result = money.add(&fraction);
        match result {
            Err(RosterError::OperandMismatch { left, right }) => {
                assert_eq!(left, "Money");
                assert_eq!(right, "Fraction");
            }
            other => panic!("Expected OperandMismatch error, got {:?}", other),
        }

        // Operands are plain values and remain usable afterwards.
        assert_eq!(money, Value::Money(Money::new(100.0)));
        assert_eq!(fraction, Value::Fraction(Fraction::new(1, 2)));
    }

    #[test]
    fn test_sub_mismatched_variants_fails() {
        let fraction = Value::Fraction(Fraction::new(1, 2));
        let money = Value::Money(Money::new(100.0));
        assert!(matches!(
            fraction.sub(&money),
            Err(RosterError::OperandMismatch {
                left: "Fraction",
                right: "Money",
            })
        ));
    }

    #[test]
    fn test_scale_applies_to_either_variant() {
        assert_eq!(
            Value::Money(Money::new(100.0)).scale(2.0),
            Value::Money(Money::new(200.0))
        );
        assert_eq!(
            Value::Fraction(Fraction::new(1, 2)).scale(2.0),
            Value::Fraction(Fraction::new(2, 2))
        );
    }

    #[test]
    fn test_divide_by_applies_to_either_variant() {
        assert_eq!(
            Value::Money(Money::new(100.0)).divide_by(2.0),
            Value::Money(Money::new(50.0))
        );
        assert_eq!(
            Value::Fraction(Fraction::new(1, 2)).divide_by(2.0),
            Value::Fraction(Fraction::new(1, 4))
        );
    }

    #[test]
    fn test_from_xml_dispatches_on_root_tag() {
        let money = Value::from_xml("<Money><amount>100</amount></Money>").unwrap();
        assert_eq!(money, Value::Money(Money::new(100.0)));

        let fraction =
            Value::from_xml("<Fraction><numerator>1</numerator><denominator>2</denominator></Fraction>")
                .unwrap();
        assert_eq!(fraction, Value::Fraction(Fraction::new(1, 2)));
    }

    #[test]
    fn test_from_xml_rejects_unknown_variant() {
        let result = Value::from_xml("<Decimal><amount>100</amount></Decimal>");
        assert!(matches!(result, Err(RosterError::ValueDecode { .. })));
    }

    #[test]
    fn test_xml_round_trip_through_union() {
        for value in [
            Value::Money(Money::new(100.0)),
            Value::Fraction(Fraction::new(1, 2)),
        ] {
            assert_eq!(Value::from_xml(&value.to_xml()).unwrap(), value);
        }
    }

    #[test]
    fn test_display_delegates_to_variant() {
        assert_eq!(Value::Money(Money::new(12.5)).to_string(), "12.5");
        assert_eq!(Value::Fraction(Fraction::new(10, 8)).to_string(), "10/8");
    }
}
