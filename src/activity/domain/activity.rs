//! Activity aggregate.

use super::{
    ActivityContent, ActivityDomainError, ActivityId, ActivityKind, TaskCompletion, TaskContent,
    TaskStatus, TaskStatusPolicy,
};
use crate::caller::{Caller, UserRef};
use crate::lead::domain::LeadId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A timestamped interaction or scheduled action tied to one lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    id: ActivityId,
    lead_id: LeadId,
    #[serde(flatten)]
    content: ActivityContent,
    created_at: DateTime<Utc>,
    performed_by: Option<UserRef>,
}

impl Activity {
    /// Records a new activity against `lead_id` on behalf of `caller`.
    #[must_use]
    pub fn new(
        lead_id: LeadId,
        content: ActivityContent,
        caller: &Caller,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            lead_id,
            content,
            created_at: clock.utc(),
            performed_by: caller.user().cloned(),
        }
    }

    /// Returns the activity identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the owning lead.
    #[must_use]
    pub const fn lead_id(&self) -> LeadId {
        self.lead_id
    }

    /// Returns the kind.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.content.kind()
    }

    /// Returns the payload.
    #[must_use]
    pub const fn content(&self) -> &ActivityContent {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the acting user, if a user recorded it.
    #[must_use]
    pub const fn performed_by(&self) -> Option<&UserRef> {
        self.performed_by.as_ref()
    }

    /// Returns the task payload when this activity is a task.
    #[must_use]
    pub const fn as_task(&self) -> Option<&TaskContent> {
        self.content.as_task()
    }

    /// Derives the due status at `now` with the default window.
    ///
    /// Returns `None` for activities that are not tasks.
    #[must_use]
    pub fn task_status(&self, now: DateTime<Utc>) -> Option<TaskStatus> {
        self.task_status_with(&TaskStatusPolicy::default(), now)
    }

    /// Derives the due status at `now` under `policy`.
    ///
    /// Returns `None` for activities that are not tasks.
    #[must_use]
    pub fn task_status_with(
        &self,
        policy: &TaskStatusPolicy,
        now: DateTime<Utc>,
    ) -> Option<TaskStatus> {
        self.as_task().map(|task| policy.derive(task.when, now))
    }

    /// Marks a task as done.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::NotATask`] for other kinds and
    /// [`ActivityDomainError::TaskAlreadyCompleted`] when the task is already
    /// done.
    pub fn complete_task(
        &mut self,
        caller: &Caller,
        clock: &impl Clock,
    ) -> Result<(), ActivityDomainError> {
        let id = self.id;
        let ActivityContent::Task(task) = &mut self.content else {
            return Err(ActivityDomainError::NotATask(id));
        };
        if task.is_done() {
            return Err(ActivityDomainError::TaskAlreadyCompleted(id));
        }
        task.completion = TaskCompletion::Done {
            completed_at: clock.utc(),
            completed_by: caller.user().cloned(),
        };
        Ok(())
    }
}
