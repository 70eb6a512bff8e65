//! Toy numeric value types.
//!
//! This module contains the two value types of the second exercise —
//! [`Money`] and [`Fraction`] — the [`Pair`] capability contract they share
//! (arithmetic operators plus XML round-trip), and the closed [`Value`]
//! tagged union whose arithmetic fails fast on variant mismatch.

mod fraction;
mod money;
mod pair;
mod value;

pub use fraction::Fraction;
pub use money::Money;
pub use pair::Pair;
pub use value::Value;
