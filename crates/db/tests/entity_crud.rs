//! Integration tests for project and draw request persistence.
//!
//! Exercises the repository layer and the PostgreSQL store against a real
//! database:
//! - Defaults applied on insert
//! - Newest-first listing and the project name join
//! - Pending-only status transitions
//! - Foreign key and CHECK constraint violations

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use sitedraw_core::status::{DrawStatus, ProjectStatus};
use sitedraw_db::ledger::load_ledger;
use sitedraw_db::models::draw_request::CreateDrawRequest;
use sitedraw_db::models::project::CreateProject;
use sitedraw_db::repositories::{DrawRequestRepo, ProjectRepo};
use sitedraw_db::store::{DrawRequestStore, PgStore, StoreError};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
        total_budget: None,
        status: None,
    }
}

fn new_draw(project_id: i64, amount: Option<rust_decimal::Decimal>) -> CreateDrawRequest {
    CreateDrawRequest {
        project_id,
        description: None,
        amount,
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_defaults(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Harbor Tower"))
        .await
        .unwrap();

    assert_eq!(project.name.as_deref(), Some("Harbor Tower"));
    assert_eq!(project.status, ProjectStatus::NotStarted);
    assert_eq!(project.total_budget, None);

    let found = ProjectRepo::find_by_id(&pool, project.id).await.unwrap();
    assert_eq!(found, Some(project));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_with_budget_and_status(pool: PgPool) {
    let input = CreateProject {
        total_budget: Some(dec!(125000.50)),
        status: Some(ProjectStatus::Delayed),
        ..new_project("Warehouse Retrofit")
    };
    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    assert_eq!(project.total_budget, Some(dec!(125000.50)));
    assert_eq!(project.status, ProjectStatus::Delayed);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_projects_newest_first(pool: PgPool) {
    let first = ProjectRepo::create(&pool, &new_project("First")).await.unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Second")).await.unwrap();

    let projects = ProjectRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_budget_violates_check(pool: PgPool) {
    let input = CreateProject {
        total_budget: Some(dec!(-10)),
        ..new_project("Bad Budget")
    };
    let result = ProjectRepo::create(&pool, &input).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

// ---------------------------------------------------------------------------
// Draw requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_draw_request_is_pending(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Site")).await.unwrap();
    let draw = DrawRequestRepo::create(&pool, &new_draw(project.id, Some(dec!(200))))
        .await
        .unwrap();

    assert_eq!(draw.status, DrawStatus::Pending);
    assert_eq!(draw.amount, Some(dec!(200)));
    assert_eq!(draw.project_id, project.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_with_project_joins_name(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Pier 9")).await.unwrap();
    let older = DrawRequestRepo::create(&pool, &new_draw(project.id, None))
        .await
        .unwrap();
    let newer = DrawRequestRepo::create(&pool, &new_draw(project.id, Some(dec!(5))))
        .await
        .unwrap();

    let draws = DrawRequestRepo::list_with_project(&pool).await.unwrap();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].draw.id, newer.id);
    assert_eq!(draws[1].draw.id, older.id);
    assert!(draws.iter().all(|d| d.project_name.as_deref() == Some("Pier 9")));

    let by_project = DrawRequestRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(by_project.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_decide_only_from_pending(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Site")).await.unwrap();
    let draw = DrawRequestRepo::create(&pool, &new_draw(project.id, Some(dec!(75))))
        .await
        .unwrap();

    let rejected = DrawRequestRepo::decide(&pool, draw.id, DrawStatus::Rejected)
        .await
        .unwrap()
        .expect("pending draw should be updated");
    assert_eq!(rejected.status, DrawStatus::Rejected);

    let again = DrawRequestRepo::decide(&pool, draw.id, DrawStatus::Approved)
        .await
        .unwrap();
    assert!(again.is_none());

    let stored = DrawRequestRepo::find_by_id(&pool, draw.id).await.unwrap().unwrap();
    assert_eq!(stored.status, DrawStatus::Rejected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draw_for_missing_project_maps_to_unknown_project(pool: PgPool) {
    let store = PgStore::new(pool);
    let result = store.insert_draw_request(&new_draw(999_999, None)).await;
    assert_matches!(result, Err(StoreError::UnknownProject(999_999)));
}

// ---------------------------------------------------------------------------
// Ledger over PostgreSQL
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_load_ledger_from_postgres(pool: PgPool) {
    let p1 = ProjectRepo::create(
        &pool,
        &CreateProject {
            total_budget: Some(dec!(1000)),
            status: Some(ProjectStatus::Active),
            ..new_project("p1")
        },
    )
    .await
    .unwrap();
    let p2 = ProjectRepo::create(
        &pool,
        &CreateProject {
            total_budget: Some(dec!(500)),
            status: Some(ProjectStatus::Completed),
            ..new_project("p2")
        },
    )
    .await
    .unwrap();
    DrawRequestRepo::create(&pool, &new_draw(p1.id, Some(dec!(200))))
        .await
        .unwrap();
    let d2 = DrawRequestRepo::create(&pool, &new_draw(p1.id, Some(dec!(50))))
        .await
        .unwrap();
    DrawRequestRepo::decide(&pool, d2.id, DrawStatus::Approved)
        .await
        .unwrap();

    let snapshot = load_ledger(&PgStore::new(pool)).await.unwrap();
    let metrics = snapshot.metrics;
    assert_eq!(metrics.total_budget, dec!(1500));
    assert_eq!(metrics.active_project_count, 1);
    assert_eq!(metrics.pending_approval_count, 1);
    assert_eq!(metrics.per_project_spend[&p1.id], dec!(250));
    assert_eq!(metrics.per_project_spend[&p2.id], dec!(0));
}
