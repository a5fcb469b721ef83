//! Route definitions for the dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`. All responses use the `{ "data": ... }` envelope.
///
/// ```text
/// GET    /                 -> snapshot
/// GET    /metrics          -> metrics
/// GET    /budget-chart     -> budget_chart
/// GET    /projects         -> projects
/// GET    /draw-requests    -> draw_requests
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::snapshot))
        .route("/metrics", get(dashboard::metrics))
        .route("/budget-chart", get(dashboard::budget_chart))
        .route("/projects", get(dashboard::projects))
        .route("/draw-requests", get(dashboard::draw_requests))
}
