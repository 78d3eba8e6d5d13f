//! Read-time orderings of a lead's activities.
//!
//! Nothing here is stored; each view is rebuilt from the log on every read.

use super::{Activity, TaskStatus, TaskStatusPolicy};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A task paired with its status at the time the view was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    /// The task activity.
    pub activity: Activity,
    /// Status derived at view time.
    pub status: TaskStatus,
}

/// Returns non-task activities, newest first.
#[must_use]
pub fn activity_history(activities: impl IntoIterator<Item = Activity>) -> Vec<Activity> {
    let mut history: Vec<Activity> = activities
        .into_iter()
        .filter(|activity| activity.as_task().is_none())
        .collect();
    history.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    history
}

/// Returns tasks soonest-due first, each with its status at `now`.
///
/// Completed tasks are dropped unless `include_completed` is set.
#[must_use]
pub fn task_schedule(
    activities: impl IntoIterator<Item = Activity>,
    policy: &TaskStatusPolicy,
    now: DateTime<Utc>,
    include_completed: bool,
) -> Vec<ScheduledTask> {
    let mut tasks: Vec<(DateTime<Utc>, ScheduledTask)> = activities
        .into_iter()
        .filter_map(|activity| {
            let task = activity.as_task()?;
            if task.is_done() && !include_completed {
                return None;
            }
            let when = task.when;
            let status = policy.derive(when, now);
            Some((when, ScheduledTask { activity, status }))
        })
        .collect();
    tasks.sort_by_key(|(when, _)| *when);
    tasks.into_iter().map(|(_, task)| task).collect()
}
