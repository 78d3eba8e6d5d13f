//! Service layer for lead create, read, update and delete.

use crate::activity::ports::{ActivityRepository, ActivityRepositoryError};
use crate::caller::Caller;
use crate::lead::{
    domain::{Lead, LeadId, LeadInput, LeadValidationError},
    ports::{LeadRepository, LeadRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for lead record operations.
#[derive(Debug, Error)]
pub enum LeadRecordError {
    /// Required attributes were blank or the stage was unknown.
    #[error(transparent)]
    Validation(#[from] LeadValidationError),
    /// No lead has the requested identifier.
    #[error("lead not found: {0}")]
    NotFound(LeadId),
    /// Lead repository operation failed.
    #[error(transparent)]
    Repository(LeadRepositoryError),
    /// Cascading activity cleanup failed.
    #[error(transparent)]
    Activities(#[from] ActivityRepositoryError),
}

impl From<LeadRepositoryError> for LeadRecordError {
    fn from(err: LeadRepositoryError) -> Self {
        match err {
            LeadRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for lead record operations.
pub type LeadRecordResult<T> = Result<T, LeadRecordError>;

/// Lead record orchestration service.
///
/// Holds the activity repository only to cascade deletes.
#[derive(Clone)]
pub struct LeadRecordService<L, A, C>
where
    L: LeadRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    leads: Arc<L>,
    activities: Arc<A>,
    clock: Arc<C>,
}

impl<L, A, C> LeadRecordService<L, A, C>
where
    L: LeadRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new lead record service.
    #[must_use]
    pub const fn new(leads: Arc<L>, activities: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            leads,
            activities,
            clock,
        }
    }

    /// Validates input and stores a new lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRecordError::Validation`] when input is invalid, or
    /// [`LeadRecordError::Repository`] when persistence fails. Nothing is
    /// stored on failure.
    pub async fn create(&self, caller: &Caller, input: LeadInput) -> LeadRecordResult<Lead> {
        let fields = input.validate().inspect_err(|err| {
            warn!(actor = %caller, error = %err, "lead create rejected");
        })?;
        let lead = Lead::new(fields, &*self.clock);
        self.leads.store(&lead).await?;
        info!(lead_id = %lead.id(), stage = %lead.stage(), actor = %caller, "lead created");
        Ok(lead)
    }

    /// Retrieves a lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRecordError::NotFound`] when the lead does not exist.
    pub async fn get(&self, id: LeadId) -> LeadRecordResult<Lead> {
        debug!(lead_id = %id, "fetching lead");
        self.leads
            .find_by_id(id)
            .await?
            .ok_or(LeadRecordError::NotFound(id))
    }

    /// Returns every lead in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRecordError::Repository`] when the lookup fails.
    pub async fn list(&self) -> LeadRecordResult<Vec<Lead>> {
        let leads = self.leads.list().await?;
        debug!(count = leads.len(), "listed leads");
        Ok(leads)
    }

    /// Replaces every mutable attribute of a lead.
    ///
    /// Identity and creation time are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRecordError::Validation`] when input is invalid and
    /// [`LeadRecordError::NotFound`] when the lead does not exist.
    pub async fn update(
        &self,
        caller: &Caller,
        id: LeadId,
        input: LeadInput,
    ) -> LeadRecordResult<Lead> {
        let fields = input.validate().inspect_err(|err| {
            warn!(lead_id = %id, actor = %caller, error = %err, "lead update rejected");
        })?;
        let mut lead = self.get(id).await?;
        lead.replace_fields(fields);
        self.leads.update(&lead).await?;
        info!(lead_id = %id, stage = %lead.stage(), actor = %caller, "lead updated");
        Ok(lead)
    }

    /// Permanently removes a lead and every activity logged against it.
    ///
    /// Activities go first, so a failed cleanup leaves the lead in place and
    /// the delete can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRecordError::NotFound`] when the lead does not exist and
    /// [`LeadRecordError::Activities`] when the cleanup fails.
    pub async fn delete(&self, caller: &Caller, id: LeadId) -> LeadRecordResult<()> {
        self.get(id).await?;
        let removed = self.activities.remove_by_lead(id).await.inspect_err(|err| {
            warn!(lead_id = %id, actor = %caller, error = %err, "lead delete aborted");
        })?;
        self.leads.remove(id).await?;
        info!(lead_id = %id, activities_removed = removed, actor = %caller, "lead deleted");
        Ok(())
    }
}
