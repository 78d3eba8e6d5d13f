//! In-memory implementation of the lead repository port.

use crate::lead::{
    domain::{Lead, LeadId},
    ports::{LeadRepository, LeadRepositoryError, LeadRepositoryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory lead repository.
///
/// Records are keyed by ID; a separate order vector preserves insertion order
/// for [`LeadRepository::list`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadRepository {
    state: Arc<RwLock<InMemoryLeadState>>,
}

#[derive(Debug, Default)]
struct InMemoryLeadState {
    leads: HashMap<LeadId, Lead>,
    order: Vec<LeadId>,
}

impl InMemoryLeadRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> LeadRepositoryResult<RwLockReadGuard<'_, InMemoryLeadState>> {
        self.state.read().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> LeadRepositoryResult<RwLockWriteGuard<'_, InMemoryLeadState>> {
        self.state.write().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn store(&self, lead: &Lead) -> LeadRepositoryResult<()> {
        let mut state = self.write()?;
        if state.leads.contains_key(&lead.id()) {
            return Err(LeadRepositoryError::DuplicateLead(lead.id()));
        }
        state.order.push(lead.id());
        state.leads.insert(lead.id(), lead.clone());
        Ok(())
    }

    async fn update(&self, lead: &Lead) -> LeadRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .leads
            .get_mut(&lead.id())
            .ok_or(LeadRepositoryError::NotFound(lead.id()))?;
        *slot = lead.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: LeadId) -> LeadRepositoryResult<Option<Lead>> {
        let state = self.read()?;
        Ok(state.leads.get(&id).cloned())
    }

    async fn list(&self) -> LeadRepositoryResult<Vec<Lead>> {
        let state = self.read()?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.leads.get(id).cloned())
            .collect())
    }

    async fn remove(&self, id: LeadId) -> LeadRepositoryResult<()> {
        let mut state = self.write()?;
        if state.leads.remove(&id).is_none() {
            return Err(LeadRepositoryError::NotFound(id));
        }
        state.order.retain(|existing| *existing != id);
        Ok(())
    }
}
