use axum::routing::post;
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// Routes mounted at `/forms`. Bodies are `application/x-www-form-urlencoded`.
///
/// ```text
/// POST   /projects         -> create_project
/// POST   /draw-requests    -> create_draw_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", post(forms::create_project))
        .route("/draw-requests", post(forms::create_draw_request))
}
