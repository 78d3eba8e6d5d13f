//! Due-status derivation for tasks.
//!
//! Status is computed from the signed distance `when - now`. The overdue
//! check runs first; the due-today window is symmetric around `now`, so it
//! only ever matches tasks that are not yet overdue.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the due-today window on either side of `now`.
pub const DEFAULT_DUE_TODAY_WINDOW_HOURS: u32 = 6;

/// Derived due status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Due time has passed.
    Overdue,
    /// Due within the window.
    DueToday,
    /// Due later than the window.
    Upcoming,
}

impl TaskStatus {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due_today",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status rule with a configurable due-today window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStatusPolicy {
    due_today_window: Duration,
}

impl TaskStatusPolicy {
    /// Creates a policy with the given window width.
    #[must_use]
    pub const fn new(due_today_window: Duration) -> Self {
        Self { due_today_window }
    }

    /// Returns the window width.
    #[must_use]
    pub const fn due_today_window(&self) -> Duration {
        self.due_today_window
    }

    /// Derives the status of a task due at `when`, observed at `now`.
    #[must_use]
    pub fn derive(&self, when: DateTime<Utc>, now: DateTime<Utc>) -> TaskStatus {
        let delta = when - now;
        if delta < Duration::zero() {
            TaskStatus::Overdue
        } else if delta.abs() < self.due_today_window {
            TaskStatus::DueToday
        } else {
            TaskStatus::Upcoming
        }
    }
}

impl Default for TaskStatusPolicy {
    fn default() -> Self {
        Self::new(Duration::hours(i64::from(DEFAULT_DUE_TODAY_WINDOW_HOURS)))
    }
}

/// Derives the status of a task due at `when`, observed at `now`, with the
/// default six-hour window.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use leadbook::activity::domain::{TaskStatus, derive_task_status};
///
/// let when = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
/// assert_eq!(derive_task_status(when, when + Duration::hours(1)), TaskStatus::Overdue);
/// assert_eq!(derive_task_status(when, when), TaskStatus::DueToday);
/// assert_eq!(derive_task_status(when, when - Duration::hours(7)), TaskStatus::Upcoming);
/// ```
#[must_use]
pub fn derive_task_status(when: DateTime<Utc>, now: DateTime<Utc>) -> TaskStatus {
    TaskStatusPolicy::default().derive(when, now)
}
