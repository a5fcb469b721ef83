//! Ledger aggregation over projects and their draw requests.
//!
//! Pure functions only: callers pass already-fetched snapshots and get a
//! freshly allocated result. Spend is inclusive of every draw regardless of
//! its review status.

use std::collections::HashMap;

use serde::Serialize;

use crate::display::project_display_name;
use crate::status::{DrawStatus, ProjectStatus};
use crate::types::{DbId, Money};

/// Read-only view of a project as seen by the ledger.
pub trait LedgerProject {
    fn project_id(&self) -> DbId;
    fn project_name(&self) -> Option<&str>;
    fn total_budget(&self) -> Option<Money>;
    fn project_status(&self) -> ProjectStatus;
}

/// Read-only view of a draw request as seen by the ledger.
pub trait LedgerDraw {
    fn draw_project_id(&self) -> DbId;
    fn amount(&self) -> Option<Money>;
    fn draw_status(&self) -> DrawStatus;
}

/// Portfolio-wide figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerMetrics {
    /// Sum of all project budgets; unbudgeted projects count as zero.
    pub total_budget: Money,
    pub active_project_count: usize,
    pub pending_approval_count: usize,
    /// Spend per project id. Every input project has an entry.
    pub per_project_spend: HashMap<DbId, Money>,
}

impl LedgerMetrics {
    /// Total spend across all projects.
    pub fn total_spend(&self) -> Money {
        self.per_project_spend.values().copied().sum()
    }
}

/// One bar pair of the budget-versus-spend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetChartPoint {
    pub project_id: DbId,
    pub name: String,
    pub budget: Money,
    pub spent: Money,
}

/// Compute portfolio metrics.
///
/// Draws whose project is not among `projects` are ignored for spend but
/// still counted toward `pending_approval_count`.
pub fn compute_metrics<P, D>(projects: &[P], draws: &[D]) -> LedgerMetrics
where
    P: LedgerProject,
    D: LedgerDraw,
{
    let total_budget = projects
        .iter()
        .map(|p| p.total_budget().unwrap_or_default())
        .sum();

    let active_project_count = projects
        .iter()
        .filter(|p| p.project_status() == ProjectStatus::Active)
        .count();

    let pending_approval_count = draws
        .iter()
        .filter(|d| d.draw_status() == DrawStatus::Pending)
        .count();

    LedgerMetrics {
        total_budget,
        active_project_count,
        pending_approval_count,
        per_project_spend: spend_by_project(projects, draws),
    }
}

/// Budget and spend per project, in the order the projects were given.
pub fn budget_chart<P, D>(projects: &[P], draws: &[D]) -> Vec<BudgetChartPoint>
where
    P: LedgerProject,
    D: LedgerDraw,
{
    let spend = spend_by_project(projects, draws);
    projects
        .iter()
        .map(|p| BudgetChartPoint {
            project_id: p.project_id(),
            name: project_display_name(p.project_name()).to_string(),
            budget: p.total_budget().unwrap_or_default(),
            spent: spend.get(&p.project_id()).copied().unwrap_or_default(),
        })
        .collect()
}

fn spend_by_project<P, D>(projects: &[P], draws: &[D]) -> HashMap<DbId, Money>
where
    P: LedgerProject,
    D: LedgerDraw,
{
    let mut spend: HashMap<DbId, Money> = projects
        .iter()
        .map(|p| (p.project_id(), Money::ZERO))
        .collect();

    for draw in draws {
        if let Some(total) = spend.get_mut(&draw.draw_project_id()) {
            *total += draw.amount().unwrap_or_default();
        }
    }
    spend
}
