//! Worker model.
//!
//! This module defines the Worker record stored by the roster.

use serde::{Deserialize, Serialize};

/// An employee record in the roster.
///
/// A worker is immutable once created: the roster replaces records wholesale
/// rather than mutating them in place. Two workers are equal when all their
/// fields are equal; the roster orders them by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// The worker's full name.
    pub name: String,
    /// The worker's post (job title).
    pub post: String,
    /// The year the worker joined.
    pub year: i32,
}

impl Worker {
    /// Creates a new worker record.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_roster::models::Worker;
    ///
    /// let worker = Worker::new("Ivanov I. I.", "engineer", 2015);
    /// assert_eq!(worker.name, "Ivanov I. I.");
    /// assert_eq!(worker.year, 2015);
    /// ```
    pub fn new(name: impl Into<String>, post: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            post: post.into(),
            year,
        }
    }

    /// Returns the worker's tenure in years, relative to `current_year`.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_roster::models::Worker;
    ///
    /// let worker = Worker::new("Ivanov I. I.", "engineer", 2015);
    /// assert_eq!(worker.tenure(2024), 9);
    /// ```
    pub fn tenure(&self, current_year: i32) -> i32 {
        current_year - self.year
    }
}
