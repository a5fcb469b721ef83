//! Handlers for the portfolio dashboard.
//!
//! Every endpoint loads a fresh [`LedgerSnapshot`] through the store traits.
//! A failed draw request fetch degrades to an empty list and is flagged in
//! the response; a failed project fetch fails the request.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sitedraw_core::display::{draw_project_name, format_amount, format_usd, project_display_name};
use sitedraw_core::ledger::BudgetChartPoint;
use sitedraw_core::status::{DrawStatus, ProjectStatus};
use sitedraw_core::types::{DbId, Money, Timestamp};
use sitedraw_db::ledger::{load_ledger, LedgerSnapshot};
use sitedraw_db::store::{DrawRequestStore, ProjectStore};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Metric cards shown at the top of the dashboard.
#[derive(Debug, Serialize)]
pub struct MetricsView {
    pub total_budget: Money,
    pub total_budget_display: String,
    pub total_spend: Money,
    pub total_spend_display: String,
    pub active_project_count: usize,
    pub pending_approval_count: usize,
    pub draws_degraded: bool,
}

/// One project card.
#[derive(Debug, Serialize)]
pub struct ProjectCard {
    pub id: DbId,
    pub name: String,
    pub status: ProjectStatus,
    pub total_budget: Money,
    pub total_budget_display: String,
    pub spent: Money,
    pub spent_display: String,
    pub created_at: Timestamp,
}

/// One row of the draw request table.
#[derive(Debug, Serialize)]
pub struct DrawRow {
    pub id: DbId,
    pub project_id: DbId,
    pub project_name: String,
    pub description: Option<String>,
    pub amount: Option<Money>,
    /// `"-"` when the draw has no amount.
    pub amount_display: String,
    pub status: DrawStatus,
    pub created_at: Timestamp,
}

/// Full dashboard payload.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub metrics: MetricsView,
    pub projects: Vec<ProjectCard>,
    pub draw_requests: Vec<DrawRow>,
    pub budget_chart: Vec<BudgetChartPoint>,
}

// ---------------------------------------------------------------------------
// View assembly
// ---------------------------------------------------------------------------

impl MetricsView {
    fn from_snapshot(snapshot: &LedgerSnapshot) -> Self {
        let total_spend = snapshot.metrics.total_spend();
        Self {
            total_budget: snapshot.metrics.total_budget,
            total_budget_display: format_usd(snapshot.metrics.total_budget),
            total_spend,
            total_spend_display: format_usd(total_spend),
            active_project_count: snapshot.metrics.active_project_count,
            pending_approval_count: snapshot.metrics.pending_approval_count,
            draws_degraded: snapshot.draws_degraded,
        }
    }
}

fn project_cards(snapshot: &LedgerSnapshot) -> Vec<ProjectCard> {
    snapshot
        .projects
        .iter()
        .map(|p| {
            let budget = p.total_budget.unwrap_or_default();
            let spent = snapshot
                .metrics
                .per_project_spend
                .get(&p.id)
                .copied()
                .unwrap_or_default();
            ProjectCard {
                id: p.id,
                name: project_display_name(p.name.as_deref()).to_string(),
                status: p.status,
                total_budget: budget,
                total_budget_display: format_usd(budget),
                spent,
                spent_display: format_usd(spent),
                created_at: p.created_at,
            }
        })
        .collect()
}

fn draw_rows(snapshot: &LedgerSnapshot) -> Vec<DrawRow> {
    snapshot
        .draw_requests
        .iter()
        .map(|row| DrawRow {
            id: row.draw.id,
            project_id: row.draw.project_id,
            project_name: draw_project_name(row.project_name.as_deref()).to_string(),
            description: row.draw.description.clone(),
            amount: row.draw.amount,
            amount_display: format_amount(row.draw.amount),
            status: row.draw.status,
            created_at: row.draw.created_at,
        })
        .collect()
}

/// Load and assemble the full dashboard from any store.
pub async fn build_dashboard<S>(store: &S) -> AppResult<DashboardView>
where
    S: ProjectStore + DrawRequestStore,
{
    let snapshot = load_ledger(store).await?;
    Ok(DashboardView {
        metrics: MetricsView::from_snapshot(&snapshot),
        projects: project_cards(&snapshot),
        draw_requests: draw_rows(&snapshot),
        budget_chart: snapshot.budget_chart.clone(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard
pub async fn snapshot(State(state): State<AppState>) -> AppResult<Json<DataResponse<DashboardView>>> {
    let data = build_dashboard(&state.store()).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/dashboard/metrics
pub async fn metrics(State(state): State<AppState>) -> AppResult<Json<DataResponse<MetricsView>>> {
    let snapshot = load_ledger(&state.store()).await?;
    Ok(Json(DataResponse {
        data: MetricsView::from_snapshot(&snapshot),
    }))
}

/// GET /api/v1/dashboard/budget-chart
pub async fn budget_chart(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BudgetChartPoint>>>> {
    let snapshot = load_ledger(&state.store()).await?;
    Ok(Json(DataResponse {
        data: snapshot.budget_chart,
    }))
}

/// GET /api/v1/dashboard/projects
pub async fn projects(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectCard>>>> {
    let snapshot = load_ledger(&state.store()).await?;
    Ok(Json(DataResponse {
        data: project_cards(&snapshot),
    }))
}

/// GET /api/v1/dashboard/draw-requests
pub async fn draw_requests(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DrawRow>>>> {
    let snapshot = load_ledger(&state.store()).await?;
    Ok(Json(DataResponse {
        data: draw_rows(&snapshot),
    }))
}
