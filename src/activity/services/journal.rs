//! Service layer for appending, listing and completing activities.

use crate::activity::{
    domain::{
        Activity, ActivityContent, ActivityDomainError, ActivityId, ActivityKind, ScheduledTask,
        TaskStatusPolicy, activity_history, task_schedule,
    },
    ports::{ActivityRepository, ActivityRepositoryError},
};
use crate::caller::Caller;
use crate::lead::{
    domain::LeadId,
    ports::{LeadRepository, LeadRepositoryError},
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for appending an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendActivityRequest {
    lead_id: LeadId,
    body: RequestBody,
}

#[derive(Debug, Clone, PartialEq)]
enum RequestBody {
    Typed(ActivityContent),
    Raw { kind: ActivityKind, payload: Value },
}

impl AppendActivityRequest {
    /// Creates a request from an already typed payload.
    #[must_use]
    pub const fn new(lead_id: LeadId, content: ActivityContent) -> Self {
        Self {
            lead_id,
            body: RequestBody::Typed(content),
        }
    }

    /// Creates a request from a kind and an untyped payload, as received from
    /// a transport layer. The payload is checked against the kind's schema
    /// when the request is handled.
    #[must_use]
    pub const fn from_payload(lead_id: LeadId, kind: ActivityKind, payload: Value) -> Self {
        Self {
            lead_id,
            body: RequestBody::Raw { kind, payload },
        }
    }

    /// Returns the target lead.
    #[must_use]
    pub const fn lead_id(&self) -> LeadId {
        self.lead_id
    }

    fn into_content(self) -> Result<ActivityContent, ActivityDomainError> {
        match self.body {
            RequestBody::Typed(content) => content.validate().map(|()| content),
            RequestBody::Raw { kind, payload } => ActivityContent::from_payload(kind, &payload),
        }
    }
}

/// Service-level errors for activity log operations.
#[derive(Debug, Error)]
pub enum ActivityLogError {
    /// Payload validation or a task rule failed.
    #[error(transparent)]
    Domain(#[from] ActivityDomainError),
    /// The referenced lead does not exist.
    #[error("lead not found: {0}")]
    LeadNotFound(LeadId),
    /// The referenced activity does not exist.
    #[error("activity not found: {0}")]
    NotFound(ActivityId),
    /// Lead lookup failed.
    #[error(transparent)]
    Leads(#[from] LeadRepositoryError),
    /// Activity repository operation failed.
    #[error(transparent)]
    Repository(ActivityRepositoryError),
}

impl From<ActivityRepositoryError> for ActivityLogError {
    fn from(err: ActivityRepositoryError) -> Self {
        match err {
            ActivityRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for activity log operations.
pub type ActivityLogResult<T> = Result<T, ActivityLogError>;

/// Activity log orchestration service.
#[derive(Clone)]
pub struct ActivityLogService<L, A, C>
where
    L: LeadRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    leads: Arc<L>,
    activities: Arc<A>,
    clock: Arc<C>,
    policy: TaskStatusPolicy,
}

impl<L, A, C> ActivityLogService<L, A, C>
where
    L: LeadRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default task status policy.
    #[must_use]
    pub fn new(leads: Arc<L>, activities: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            leads,
            activities,
            clock,
            policy: TaskStatusPolicy::default(),
        }
    }

    /// Replaces the task status policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: TaskStatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the task status policy in use.
    #[must_use]
    pub const fn policy(&self) -> &TaskStatusPolicy {
        &self.policy
    }

    /// Appends an activity to a lead's log.
    ///
    /// The lead check and the store are separate calls, so an append racing
    /// a delete of the same lead can outlive the cascade.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::LeadNotFound`] when the lead does not exist
    /// and [`ActivityLogError::Domain`] when the payload does not match its
    /// kind (including a task without a valid `when`). Nothing is stored on
    /// failure.
    pub async fn append(
        &self,
        caller: &Caller,
        request: AppendActivityRequest,
    ) -> ActivityLogResult<Activity> {
        let lead_id = request.lead_id();
        self.ensure_lead(lead_id).await?;
        let content = request.into_content().inspect_err(|err| {
            warn!(lead_id = %lead_id, actor = %caller, error = %err, "activity rejected");
        })?;
        let activity = Activity::new(lead_id, content, caller, &*self.clock);
        self.activities.store(&activity).await?;
        info!(
            activity_id = %activity.id(),
            lead_id = %lead_id,
            kind = %activity.kind(),
            actor = %caller,
            "activity appended"
        );
        Ok(activity)
    }

    /// Returns every activity of a lead in append order.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::LeadNotFound`] when the lead does not
    /// exist.
    pub async fn list_by_lead(&self, lead_id: LeadId) -> ActivityLogResult<Vec<Activity>> {
        self.ensure_lead(lead_id).await?;
        let activities = self.activities.find_by_lead(lead_id).await?;
        debug!(lead_id = %lead_id, count = activities.len(), "listed activities");
        Ok(activities)
    }

    /// Returns a lead's non-task activities, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::LeadNotFound`] when the lead does not
    /// exist.
    pub async fn activity_history(&self, lead_id: LeadId) -> ActivityLogResult<Vec<Activity>> {
        Ok(activity_history(self.list_by_lead(lead_id).await?))
    }

    /// Returns a lead's tasks soonest first with their status at the current
    /// clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::LeadNotFound`] when the lead does not
    /// exist.
    pub async fn task_board(
        &self,
        lead_id: LeadId,
        include_completed: bool,
    ) -> ActivityLogResult<Vec<ScheduledTask>> {
        let activities = self.list_by_lead(lead_id).await?;
        Ok(task_schedule(
            activities,
            &self.policy,
            self.clock.utc(),
            include_completed,
        ))
    }

    /// Marks a task done and appends a completion note to the same lead.
    ///
    /// If the note cannot be stored the task is written back as pending.
    ///
    /// Returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::NotFound`] for unknown activities and
    /// [`ActivityLogError::Domain`] when the activity is not a task or is
    /// already done.
    pub async fn complete_task(
        &self,
        caller: &Caller,
        activity_id: ActivityId,
    ) -> ActivityLogResult<Activity> {
        let pending = self
            .activities
            .find_by_id(activity_id)
            .await?
            .ok_or(ActivityLogError::NotFound(activity_id))?;
        let mut task = pending.clone();
        task.complete_task(caller, &*self.clock)?;
        self.activities.update(&task).await?;

        let note = task
            .as_task()
            .map(|content| content.note.as_str())
            .unwrap_or_default();
        let audit = Activity::new(
            task.lead_id(),
            ActivityContent::note(format!("✅ Task completed ({note})")),
            caller,
            &*self.clock,
        );
        if let Err(err) = self.activities.store(&audit).await {
            if let Err(rollback) = self.activities.update(&pending).await {
                warn!(
                    activity_id = %activity_id,
                    error = %rollback,
                    "task completion rollback failed"
                );
            }
            return Err(err.into());
        }
        info!(
            activity_id = %activity_id,
            lead_id = %task.lead_id(),
            actor = %caller,
            "task completed"
        );
        Ok(task)
    }

    async fn ensure_lead(&self, lead_id: LeadId) -> ActivityLogResult<()> {
        match self.leads.find_by_id(lead_id).await? {
            Some(_) => Ok(()),
            None => Err(ActivityLogError::LeadNotFound(lead_id)),
        }
    }
}
