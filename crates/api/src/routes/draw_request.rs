//! Route definitions for the `/draw-requests` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::draw_request;
use crate::state::AppState;

/// Routes mounted at `/draw-requests`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// POST   /{id}/approve    -> approve
/// POST   /{id}/reject     -> reject
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(draw_request::list).post(draw_request::create))
        .route("/{id}", get(draw_request::get_by_id))
        .route("/{id}/approve", post(draw_request::approve))
        .route("/{id}/reject", post(draw_request::reject))
}
