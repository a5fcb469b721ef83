pub mod dashboard;
pub mod draw_request;
pub mod forms;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                  list, create
/// /projects/{id}                             get
/// /projects/{id}/draw-requests               draw requests of one project
///
/// /draw-requests                             list (joined with project name), create
/// /draw-requests/{id}                        get
/// /draw-requests/{id}/approve                approve a Pending draw (POST)
/// /draw-requests/{id}/reject                 reject a Pending draw (POST)
///
/// /forms/projects                            create project from form fields (POST)
/// /forms/draw-requests                       submit draw request from form fields (POST)
///
/// /dashboard                                 full dashboard payload
/// /dashboard/metrics                         metric cards
/// /dashboard/budget-chart                    budget vs. spend per project
/// /dashboard/projects                        project cards
/// /dashboard/draw-requests                   draw request table rows
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/draw-requests", draw_request::router())
        .nest("/forms", forms::router())
        .nest("/dashboard", dashboard::router())
}
