//! Handlers for URL-encoded form submissions.
//!
//! The forms carry raw strings; conversion to the typed DTOs happens in
//! [`crate::forms`] and then follows the same path as the JSON endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitedraw_db::models::draw_request::DrawRequest;
use sitedraw_db::models::project::Project;

use crate::error::AppResult;
use crate::extract::AppForm;
use crate::forms::{DrawRequestForm, ProjectForm};
use crate::handlers::draw_request::submit_draw_request;
use crate::handlers::project::submit_project;
use crate::state::AppState;

/// POST /api/v1/forms/projects
pub async fn create_project(
    State(state): State<AppState>,
    AppForm(form): AppForm<ProjectForm>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = form.into_create()?;
    let project = submit_project(&state.store(), input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /api/v1/forms/draw-requests
pub async fn create_draw_request(
    State(state): State<AppState>,
    AppForm(form): AppForm<DrawRequestForm>,
) -> AppResult<(StatusCode, Json<DrawRequest>)> {
    let input = form.into_create()?;
    let draw = submit_draw_request(&state.store(), input).await?;
    Ok((StatusCode::CREATED, Json(draw)))
}
