//! Repository for the `draw_requests` table.

use sitedraw_core::status::DrawStatus;
use sitedraw_core::types::DbId;
use sqlx::PgPool;

use crate::models::draw_request::{CreateDrawRequest, DrawRequest, DrawRequestWithProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, description, amount, status_id, created_at, updated_at";

/// Same columns qualified with the `d` alias, for joins.
const JOINED_COLUMNS: &str = "d.id, d.project_id, d.description, d.amount, d.status_id, \
     d.created_at, d.updated_at, p.name AS project_name";

/// Provides create, read and status-transition operations for draw requests.
pub struct DrawRequestRepo;

impl DrawRequestRepo {
    /// Insert a new draw request in the Pending status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDrawRequest,
    ) -> Result<DrawRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO draw_requests (project_id, description, amount, status_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DrawRequest>(&query)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(DrawStatus::Pending.id())
            .fetch_one(pool)
            .await
    }

    /// Find a draw request by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DrawRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM draw_requests WHERE id = $1");
        sqlx::query_as::<_, DrawRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all draw requests, most recently created first, each joined with
    /// its project's name.
    pub async fn list_with_project(pool: &PgPool) -> Result<Vec<DrawRequestWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM draw_requests d
             LEFT JOIN projects p ON p.id = d.project_id
             ORDER BY d.created_at DESC, d.id DESC"
        );
        sqlx::query_as::<_, DrawRequestWithProject>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the draw requests of one project, most recently created first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DrawRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM draw_requests
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, DrawRequest>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Move a Pending draw request to `status`.
    ///
    /// Returns `None` if no row with `id` exists or the row is no longer
    /// Pending; callers distinguish the two with [`Self::find_by_id`].
    pub async fn decide(
        pool: &PgPool,
        id: DbId,
        status: DrawStatus,
    ) -> Result<Option<DrawRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE draw_requests SET status_id = $2
             WHERE id = $1 AND status_id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DrawRequest>(&query)
            .bind(id)
            .bind(status.id())
            .bind(DrawStatus::Pending.id())
            .fetch_optional(pool)
            .await
    }
}
