//! Dashboard summary and lead export over the repository ports.

use crate::activity::ports::{ActivityRepository, ActivityRepositoryError};
use crate::lead::ports::{LeadRepository, LeadRepositoryError};
use crate::reporting::domain::{DashboardSummary, ExportError, leads_to_csv};
use crate::settings::CrmSettings;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for reports.
#[derive(Debug, Error)]
pub enum ReportingError {
    /// Lead lookup failed.
    #[error(transparent)]
    Leads(#[from] LeadRepositoryError),
    /// Activity lookup failed.
    #[error(transparent)]
    Activities(#[from] ActivityRepositoryError),
    /// Rendering the export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result type for report operations.
pub type ReportingResult<T> = Result<T, ReportingError>;

/// Report orchestration service.
#[derive(Clone)]
pub struct ReportingService<L, A, C>
where
    L: LeadRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    leads: Arc<L>,
    activities: Arc<A>,
    clock: Arc<C>,
    settings: CrmSettings,
}

impl<L, A, C> ReportingService<L, A, C>
where
    L: LeadRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new reporting service.
    #[must_use]
    pub const fn new(
        leads: Arc<L>,
        activities: Arc<A>,
        clock: Arc<C>,
        settings: CrmSettings,
    ) -> Self {
        Self {
            leads,
            activities,
            clock,
            settings,
        }
    }

    /// Computes the dashboard summary at the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError`] when a repository lookup fails.
    pub async fn summary(&self) -> ReportingResult<DashboardSummary> {
        let leads = self.leads.list().await?;
        let mut activities = Vec::new();
        for lead in &leads {
            activities.extend(self.activities.find_by_lead(lead.id()).await?);
        }
        let summary = DashboardSummary::compute(
            &leads,
            &activities,
            self.clock.utc(),
            self.settings.recent_activity_window(),
        );
        debug!(
            total_leads = summary.total_leads,
            recent_activities = summary.recent_activities,
            upcoming_tasks = summary.upcoming_tasks,
            "dashboard summary computed"
        );
        Ok(summary)
    }

    /// Renders every lead as CSV in list order.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError`] when the lookup or rendering fails.
    pub async fn export_leads_csv(&self) -> ReportingResult<String> {
        let leads = self.leads.list().await?;
        let csv = leads_to_csv(&leads, &self.settings.csv_date_format)?;
        debug!(rows = leads.len(), "lead export rendered");
        Ok(csv)
    }
}
