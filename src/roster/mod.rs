//! The roster store.
//!
//! This module contains the [`Staff`] collection of workers, kept sorted by
//! name, together with its tenure queries, fixed-width table rendering and
//! XML load/save.

mod store;
mod table;
mod xml;

pub use store::Staff;
