//! HTTP-level tests for the URL-encoded form endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_form};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_form_with_blank_budget(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool),
        "/api/v1/forms/projects",
        &[("name", "Harbor+Tower"), ("total_budget", ""), ("status", "")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Harbor Tower");
    assert!(json["total_budget"].is_null());
    assert_eq!(json["status"], "Not Started");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_form_with_status_label(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool),
        "/api/v1/forms/projects",
        &[("name", "Dockside"), ("total_budget", "1500.50"), ("status", "Not+Started")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["total_budget"], 1500.5);
    assert_eq!(json["status"], "Not Started");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn draw_form_for_existing_project(pool: PgPool) {
    let project_id = common::create_project(&pool, json!({ "name": "Pier 9" })).await;
    let id = project_id.to_string();

    let response = post_form(
        common::build_test_app(pool),
        "/api/v1/forms/draw-requests",
        &[("project_id", id.as_str()), ("description", ""), ("amount", "200")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "Pending");
    assert!(json["description"].is_null());
    assert_eq!(json["amount"], 200.0);
}

#[tokio::test]
async fn draw_form_without_project_is_rejected_before_storage() {
    let response = post_form(
        common::build_offline_app(),
        "/api/v1/forms/draw-requests",
        &[("project_id", ""), ("amount", "10")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Project is required");
}

#[tokio::test]
async fn project_form_with_unknown_status_is_rejected() {
    let response = post_form(
        common::build_offline_app(),
        "/api/v1/forms/projects",
        &[("name", "X"), ("status", "Paused")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
