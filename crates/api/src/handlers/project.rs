//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sitedraw_core::error::CoreError;
use sitedraw_core::types::DbId;
use sitedraw_db::models::draw_request::DrawRequest;
use sitedraw_db::models::project::{CreateProject, Project};
use sitedraw_db::store::{DrawRequestStore, ProjectStore};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Normalize, validate and insert a project through any [`ProjectStore`].
pub async fn submit_project<S: ProjectStore>(store: &S, input: CreateProject) -> AppResult<Project> {
    let input = input.normalized();
    input.validate()?;

    let project = store.insert_project(&input).await?;
    tracing::info!(
        project_id = project.id,
        status = %project.status,
        "Project created",
    );
    Ok(project)
}

/// Look up a project or fail with 404.
pub async fn ensure_project_exists<S: ProjectStore>(store: &S, id: DbId) -> AppResult<Project> {
    store
        .find_project(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// Draw requests of an existing project, newest first.
pub async fn project_draw_requests<S>(store: &S, id: DbId) -> AppResult<Vec<DrawRequest>>
where
    S: ProjectStore + DrawRequestStore,
{
    ensure_project_exists(store, id).await?;
    Ok(store.fetch_project_draw_requests(id).await?)
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = submit_project(&state.store(), input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store().fetch_projects().await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ensure_project_exists(&state.store(), id).await?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/draw-requests
pub async fn list_draw_requests(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<DrawRequest>>> {
    let draws = project_draw_requests(&state.store(), id).await?;
    Ok(Json(draws))
}
