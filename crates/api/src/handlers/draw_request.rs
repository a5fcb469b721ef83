//! Handlers for the `/draw-requests` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sitedraw_core::error::CoreError;
use sitedraw_core::status::{validate_draw_transition, DrawStatus};
use sitedraw_core::types::DbId;
use sitedraw_db::models::draw_request::{CreateDrawRequest, DrawRequest, DrawRequestWithProject};
use sitedraw_db::store::DrawRequestStore;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Normalize, validate and insert a Pending draw request.
///
/// A missing project surfaces as a 404 through `StoreError::UnknownProject`.
pub async fn submit_draw_request<S: DrawRequestStore>(
    store: &S,
    input: CreateDrawRequest,
) -> AppResult<DrawRequest> {
    let input = input.normalized();
    input.validate()?;

    let draw = store.insert_draw_request(&input).await?;
    tracing::info!(
        draw_request_id = draw.id,
        project_id = draw.project_id,
        "Draw request submitted",
    );
    Ok(draw)
}

/// Move a Pending draw request to `next`.
///
/// 404 when the draw does not exist, 409 when it was already decided
/// (including by a concurrent request between the read and the update).
pub async fn decide_draw_request<S: DrawRequestStore>(
    store: &S,
    id: DbId,
    next: DrawStatus,
) -> AppResult<DrawRequest> {
    let current = store
        .find_draw_request(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DrawRequest",
            id,
        }))?;
    validate_draw_transition(current.status, next)?;

    let updated = store.update_draw_status(id, next).await?.ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "Draw request {id} was already decided"
        )))
    })?;

    tracing::info!(
        draw_request_id = id,
        project_id = updated.project_id,
        status = %updated.status,
        "Draw request decided",
    );
    Ok(updated)
}

/// POST /api/v1/draw-requests
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDrawRequest>,
) -> AppResult<(StatusCode, Json<DrawRequest>)> {
    let draw = submit_draw_request(&state.store(), input).await?;
    Ok((StatusCode::CREATED, Json(draw)))
}

/// GET /api/v1/draw-requests
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DrawRequestWithProject>>> {
    let draws = state.store().fetch_draw_requests().await?;
    Ok(Json(draws))
}

/// GET /api/v1/draw-requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DrawRequest>> {
    let draw = state
        .store()
        .find_draw_request(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DrawRequest",
            id,
        }))?;
    Ok(Json(draw))
}

/// POST /api/v1/draw-requests/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DrawRequest>> {
    let draw = decide_draw_request(&state.store(), id, DrawStatus::Approved).await?;
    Ok(Json(draw))
}

/// POST /api/v1/draw-requests/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DrawRequest>> {
    let draw = decide_draw_request(&state.store(), id, DrawStatus::Rejected).await?;
    Ok(Json(draw))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;
    use sitedraw_db::models::project::CreateProject;
    use sitedraw_db::store::{MemoryStore, ProjectStore, StoreError};

    use super::*;

    async fn store_with_draw() -> (MemoryStore, DrawRequest) {
        let store = MemoryStore::new();
        let project = store
            .insert_project(&CreateProject {
                name: "Site".to_string(),
                description: None,
                total_budget: Some(dec!(1000)),
                status: None,
            })
            .await
            .unwrap();
        let draw = submit_draw_request(
            &store,
            CreateDrawRequest {
                project_id: project.id,
                description: Some(String::new()),
                amount: Some(dec!(200)),
            },
        )
        .await
        .unwrap();
        (store, draw)
    }

    #[tokio::test]
    async fn submitted_draw_is_pending_without_blank_description() {
        let (_, draw) = store_with_draw().await;
        assert_eq!(draw.status, DrawStatus::Pending);
        assert_eq!(draw.description, None);
    }

    #[tokio::test]
    async fn negative_amount_is_rejected_before_insert() {
        let (store, draw) = store_with_draw().await;
        let result = submit_draw_request(
            &store,
            CreateDrawRequest {
                project_id: draw.project_id,
                description: None,
                amount: Some(dec!(-5)),
            },
        )
        .await;
        assert_matches!(result, Err(AppError::Core(CoreError::Validation(_))));
        assert_eq!(store.fetch_draw_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_project_is_reported() {
        let store = MemoryStore::new();
        let result = submit_draw_request(
            &store,
            CreateDrawRequest {
                project_id: 404,
                description: None,
                amount: None,
            },
        )
        .await;
        assert_matches!(result, Err(AppError::Store(StoreError::UnknownProject(404))));
    }

    #[tokio::test]
    async fn approve_then_reject_conflicts() {
        let (store, draw) = store_with_draw().await;

        let approved = decide_draw_request(&store, draw.id, DrawStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.status, DrawStatus::Approved);

        let result = decide_draw_request(&store, draw.id, DrawStatus::Rejected).await;
        assert_matches!(result, Err(AppError::Core(CoreError::Conflict(_))));
        let stored = store.find_draw_request(draw.id).await.unwrap().unwrap();
        assert_eq!(stored.status, DrawStatus::Approved);
    }

    #[tokio::test]
    async fn deciding_missing_draw_is_not_found() {
        let store = MemoryStore::new();
        let result = decide_draw_request(&store, 1, DrawStatus::Approved).await;
        assert_matches!(
            result,
            Err(AppError::Core(CoreError::NotFound { entity: "DrawRequest", id: 1 }))
        );
    }

    #[tokio::test]
    async fn moving_back_to_pending_is_invalid() {
        let (store, draw) = store_with_draw().await;
        let result = decide_draw_request(&store, draw.id, DrawStatus::Pending).await;
        assert_matches!(result, Err(AppError::Core(CoreError::Validation(_))));
    }
}
