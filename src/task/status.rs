//! Task status resolution.
//!
//! Status is derived, never assembled ahead of time: the consuming
//! layer recomputes it whenever a task is read or its done flag flips,
//! so a task drifts from `Active` to `Overdue` without being written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task, relative to its deadline and done flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Open, deadline not yet passed (or no deadline).
    Active,
    /// Done before the deadline passed (or without one).
    Completed,
    /// Open with the deadline passed.
    Overdue,
    /// Done, but only after the deadline had passed.
    Late,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::Late => "late",
        })
    }
}

/// Derive a task's status from its deadline and done flag.
#[must_use]
pub fn resolve_status(deadline: Option<NaiveDate>, done: bool, today: NaiveDate) -> Status {
    let deadline_passed = deadline.is_some_and(|d| d < today);
    match (done, deadline_passed) {
        (true, true) => Status::Late,
        (true, false) => Status::Completed,
        (false, true) => Status::Overdue,
        (false, false) => Status::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 6, 15)
    }

    #[test]
    fn test_open_without_deadline_is_active() {
        assert_eq!(resolve_status(None, false, today()), Status::Active);
    }

    #[test]
    fn test_open_with_future_deadline_is_active() {
        let deadline = Some(date(2026, 6, 16));
        assert_eq!(resolve_status(deadline, false, today()), Status::Active);
    }

    #[test]
    fn test_open_past_deadline_is_overdue() {
        let deadline = Some(date(2026, 6, 14));
        assert_eq!(resolve_status(deadline, false, today()), Status::Overdue);
    }

    #[test]
    fn test_done_without_deadline_is_completed() {
        assert_eq!(resolve_status(None, true, today()), Status::Completed);
    }

    #[test]
    fn test_done_past_deadline_is_late() {
        let deadline = Some(date(2026, 6, 14));
        assert_eq!(resolve_status(deadline, true, today()), Status::Late);
    }

    #[test]
    fn test_deadline_today_has_not_passed() {
        let deadline = Some(today());
        assert_eq!(resolve_status(deadline, false, today()), Status::Active);
        assert_eq!(resolve_status(deadline, true, today()), Status::Completed);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Active.to_string(), "active");
        assert_eq!(Status::Completed.to_string(), "completed");
        assert_eq!(Status::Overdue.to_string(), "overdue");
        assert_eq!(Status::Late.to_string(), "late");
    }
}
