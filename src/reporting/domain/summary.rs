//! Dashboard aggregates.

use crate::activity::domain::Activity;
use crate::lead::domain::{Lead, LeadStage};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Number of leads at one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCount {
    /// Pipeline stage.
    pub stage: LeadStage,
    /// Leads currently at the stage.
    pub count: usize,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Total number of leads.
    pub total_leads: usize,
    /// Stages with at least one lead, in pipeline order.
    pub leads_by_stage: Vec<StageCount>,
    /// Activities created within the recent window.
    pub recent_activities: usize,
    /// Open tasks that are not yet due.
    pub upcoming_tasks: usize,
}

impl DashboardSummary {
    /// Computes the summary at `now`.
    #[must_use]
    pub fn compute<'a>(
        leads: &[Lead],
        activities: impl IntoIterator<Item = &'a Activity>,
        now: DateTime<Utc>,
        recent_window: Duration,
    ) -> Self {
        let leads_by_stage = LeadStage::ALL
            .iter()
            .map(|stage| StageCount {
                stage: *stage,
                count: leads.iter().filter(|lead| lead.stage() == *stage).count(),
            })
            .filter(|entry| entry.count > 0)
            .collect();

        let since = now
            .checked_sub_signed(recent_window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let mut recent_activities = 0;
        let mut upcoming_tasks = 0;
        for activity in activities {
            if activity.created_at() >= since {
                recent_activities += 1;
            }
            if activity
                .as_task()
                .is_some_and(|task| !task.is_done() && task.when >= now)
            {
                upcoming_tasks += 1;
            }
        }

        Self {
            total_leads: leads.len(),
            leads_by_stage,
            recent_activities,
            upcoming_tasks,
        }
    }

    /// Returns how many stages currently hold leads.
    #[must_use]
    pub fn active_stages(&self) -> usize {
        self.leads_by_stage.len()
    }
}
