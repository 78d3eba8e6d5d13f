//! Repository port for activity persistence.

use crate::activity::domain::{Activity, ActivityId};
use crate::lead::domain::LeadId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity repository operations.
pub type ActivityRepositoryResult<T> = Result<T, ActivityRepositoryError>;

/// Activity persistence contract.
///
/// Implementations must serialise writes so concurrent appends for the same
/// lead are never lost.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Appends a new activity.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::DuplicateActivity`] when the ID
    /// already exists.
    async fn store(&self, activity: &Activity) -> ActivityRepositoryResult<()>;

    /// Replaces a stored activity. Used only for task completion.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::NotFound`] when the activity does
    /// not exist.
    async fn update(&self, activity: &Activity) -> ActivityRepositoryResult<()>;

    /// Finds an activity by identifier.
    async fn find_by_id(&self, id: ActivityId) -> ActivityRepositoryResult<Option<Activity>>;

    /// Returns a lead's activities in append order.
    async fn find_by_lead(&self, lead_id: LeadId) -> ActivityRepositoryResult<Vec<Activity>>;

    /// Removes every activity of a lead and returns how many were removed.
    async fn remove_by_lead(&self, lead_id: LeadId) -> ActivityRepositoryResult<usize>;
}

/// Errors returned by activity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityRepositoryError {
    /// An activity with the same identifier already exists.
    #[error("duplicate activity identifier: {0}")]
    DuplicateActivity(ActivityId),

    /// The activity was not found.
    #[error("activity not found: {0}")]
    NotFound(ActivityId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
