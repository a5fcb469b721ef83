//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// GET    /{id}                 -> get_by_id
/// GET    /{id}/draw-requests   -> list_draw_requests
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/draw-requests", get(project::list_draw_requests))
}
