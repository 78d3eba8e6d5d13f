//! In-memory implementation of the activity repository port.

use crate::activity::{
    domain::{Activity, ActivityId},
    ports::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult},
};
use crate::lead::domain::LeadId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory activity repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    state: Arc<RwLock<InMemoryActivityState>>,
}

#[derive(Debug, Default)]
struct InMemoryActivityState {
    activities: HashMap<ActivityId, Activity>,
    lead_index: HashMap<LeadId, Vec<ActivityId>>,
}

impl InMemoryActivityRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> ActivityRepositoryError {
    ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn store(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.activities.contains_key(&activity.id()) {
            return Err(ActivityRepositoryError::DuplicateActivity(activity.id()));
        }
        state
            .lead_index
            .entry(activity.lead_id())
            .or_default()
            .push(activity.id());
        state.activities.insert(activity.id(), activity.clone());
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .activities
            .get_mut(&activity.id())
            .ok_or(ActivityRepositoryError::NotFound(activity.id()))?;
        *slot = activity.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ActivityId) -> ActivityRepositoryResult<Option<Activity>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.activities.get(&id).cloned())
    }

    async fn find_by_lead(&self, lead_id: LeadId) -> ActivityRepositoryResult<Vec<Activity>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .lead_index
            .get(&lead_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.activities.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn remove_by_lead(&self, lead_id: LeadId) -> ActivityRepositoryResult<usize> {
        let mut state = self.state.write().map_err(poisoned)?;
        let ids = state.lead_index.remove(&lead_id).unwrap_or_default();
        for id in &ids {
            state.activities.remove(id);
        }
        Ok(ids.len())
    }
}
