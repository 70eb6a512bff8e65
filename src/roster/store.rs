//! The in-memory roster collection.

use chrono::{Datelike, Local};

use crate::models::Worker;

/// An ordered collection of workers, kept sorted ascending by name.
///
/// The sorted-by-name invariant holds after every insertion. Duplicate names
/// and fully duplicate records are allowed; there is no uniqueness
/// constraint.
///
/// # Example
///
/// ```
/// use staff_roster::roster::Staff;
///
/// let mut staff = Staff::new();
/// staff.add("Petrov P. P.", "manager", 2020);
/// staff.add("Ivanov I. I.", "engineer", 2000);
///
/// let names: Vec<&str> = staff.workers().iter().map(|w| w.name.as_str()).collect();
/// assert_eq!(names, vec!["Ivanov I. I.", "Petrov P. P."]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Staff {
    pub(crate) workers: Vec<Worker>,
}

impl Staff {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the workers in stored (name-sorted) order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Returns the number of workers in the roster.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Returns true if the roster holds no workers.
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Adds a worker and re-sorts the roster by name.
    ///
    /// The sort is stable, so records with equal names keep their relative
    /// insertion order.
    pub fn add(&mut self, name: impl Into<String>, post: impl Into<String>, year: i32) {
        self.workers.push(Worker::new(name, post, year));
        self.workers.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Returns the workers whose tenure relative to `current_year` is at
    /// least `period` years, in stored order.
    ///
    /// The current year is an explicit parameter so the query stays
    /// deterministic; [`Staff::select_now`] samples it from the system clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_roster::roster::Staff;
    ///
    /// let mut staff = Staff::new();
    /// staff.add("A", "engineer", 2000);
    /// staff.add("B", "manager", 2020);
    ///
    /// let selected = staff.select(10, 2024);
    /// assert_eq!(selected.len(), 1);
    /// assert_eq!(selected[0].name, "A");
    /// ```
    pub fn select(&self, period: i32, current_year: i32) -> Vec<&Worker> {
        self.workers
            .iter()
            .filter(|worker| worker.tenure(current_year) >= period)
            .collect()
    }

    /// Returns the workers with at least `period` years of tenure, sampling
    /// the current year from the local clock.
    pub fn select_now(&self, period: i32) -> Vec<&Worker> {
        self.select(period, Local::now().year())
    }

    /// Replaces the whole collection, used when loading from a file.
    pub(crate) fn replace(&mut self, workers: Vec<Worker>) {
        self.workers = workers;
    }
}
