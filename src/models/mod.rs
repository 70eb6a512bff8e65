//! Core data models for the roster manager.

mod worker;

pub use worker::Worker;
