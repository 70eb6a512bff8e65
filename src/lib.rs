//! Employee roster manager and toy numeric value types.
//!
//! This crate provides two independent components: a [`roster::Staff`] store
//! holding employee records sorted by name, with tenure queries, tabular
//! rendering and XML persistence; and the [`values`] module with two small
//! numeric value types ([`values::Money`] and [`values::Fraction`]) sharing
//! an arithmetic-plus-XML capability contract.

#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod models;
pub mod roster;
pub mod values;
