//! Loads a dashboard snapshot through the store interface and aggregates it.

use serde::Serialize;
use sitedraw_core::ledger::{budget_chart, compute_metrics, BudgetChartPoint, LedgerMetrics};

use crate::models::draw_request::DrawRequestWithProject;
use crate::models::project::Project;
use crate::store::{DrawRequestStore, ProjectStore, StoreError};

/// Everything the dashboard shows, computed from one pair of fetches.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSnapshot {
    pub projects: Vec<Project>,
    pub draw_requests: Vec<DrawRequestWithProject>,
    pub metrics: LedgerMetrics,
    pub budget_chart: Vec<BudgetChartPoint>,
    /// `true` when draw requests could not be fetched and were treated as empty.
    pub draws_degraded: bool,
}

/// Fetch projects and draw requests, then aggregate.
///
/// A project fetch failure is returned to the caller. A draw request fetch
/// failure is logged and treated as an empty list.
pub async fn load_ledger<S>(store: &S) -> Result<LedgerSnapshot, StoreError>
where
    S: ProjectStore + DrawRequestStore,
{
    let projects = store.fetch_projects().await?;

    let (draw_requests, draws_degraded) = match store.fetch_draw_requests().await {
        Ok(draws) => (draws, false),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch draw requests, continuing without them");
            (Vec::new(), true)
        }
    };

    let metrics = compute_metrics(&projects, &draw_requests);
    let budget_chart = budget_chart(&projects, &draw_requests);

    tracing::debug!(
        project_count = projects.len(),
        draw_count = draw_requests.len(),
        pending = metrics.pending_approval_count,
        "Ledger snapshot loaded",
    );

    Ok(LedgerSnapshot {
        projects,
        draw_requests,
        metrics,
        budget_chart,
        draws_degraded,
    })
}
