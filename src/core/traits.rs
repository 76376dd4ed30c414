//! Shared traits for task items.

use chrono::{Duration, NaiveDate};

/// Trait for items that carry an optional deadline.
///
/// The reference date is always passed in by the caller so that one
/// top-level operation compares every item against the same day.
pub trait Schedulable {
    /// Get the deadline date, if any.
    fn deadline(&self) -> Option<NaiveDate>;

    /// Check if the deadline lies strictly before `today`.
    fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline().is_some_and(|d| d < today)
    }

    /// Check if the deadline falls within the next `days` days.
    fn is_due_within(&self, today: NaiveDate, days: i64) -> bool {
        let horizon = today + Duration::days(days);
        self.deadline().is_some_and(|d| d <= horizon)
    }
}
