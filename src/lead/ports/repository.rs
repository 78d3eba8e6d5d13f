//! Repository port for lead persistence and lookup.

use crate::lead::domain::{Lead, LeadId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for lead repository operations.
pub type LeadRepositoryResult<T> = Result<T, LeadRepositoryError>;

/// Lead persistence contract.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Stores a new lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError::DuplicateLead`] when the lead ID already
    /// exists.
    async fn store(&self, lead: &Lead) -> LeadRepositoryResult<()>;

    /// Replaces an existing lead record.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError::NotFound`] when the lead does not exist.
    async fn update(&self, lead: &Lead) -> LeadRepositoryResult<()>;

    /// Finds a lead by identifier.
    ///
    /// Returns `None` when the lead does not exist.
    async fn find_by_id(&self, id: LeadId) -> LeadRepositoryResult<Option<Lead>>;

    /// Returns every lead in insertion order.
    async fn list(&self) -> LeadRepositoryResult<Vec<Lead>>;

    /// Permanently removes a lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError::NotFound`] when the lead does not exist.
    async fn remove(&self, id: LeadId) -> LeadRepositoryResult<()>;
}

/// Errors returned by lead repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LeadRepositoryError {
    /// A lead with the same identifier already exists.
    #[error("duplicate lead identifier: {0}")]
    DuplicateLead(LeadId),

    /// The lead was not found.
    #[error("lead not found: {0}")]
    NotFound(LeadId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LeadRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
