//! PostgreSQL-backed store delegating to the repositories.

use sitedraw_core::status::DrawStatus;
use sitedraw_core::types::DbId;
use sqlx::PgPool;

use super::{DrawRequestStore, ProjectStore, StoreError};
use crate::models::draw_request::{CreateDrawRequest, DrawRequest, DrawRequestWithProject};
use crate::models::project::{CreateProject, Project};
use crate::repositories::{DrawRequestRepo, ProjectRepo};

/// PostgreSQL foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Store over a PostgreSQL pool. Cheap to clone.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ProjectStore for PgStore {
    async fn fetch_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_project(&self, input: &CreateProject) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }
}

impl DrawRequestStore for PgStore {
    async fn fetch_draw_requests(&self) -> Result<Vec<DrawRequestWithProject>, StoreError> {
        Ok(DrawRequestRepo::list_with_project(&self.pool).await?)
    }

    async fn fetch_project_draw_requests(
        &self,
        project_id: DbId,
    ) -> Result<Vec<DrawRequest>, StoreError> {
        Ok(DrawRequestRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn find_draw_request(&self, id: DbId) -> Result<Option<DrawRequest>, StoreError> {
        Ok(DrawRequestRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_draw_request(
        &self,
        input: &CreateDrawRequest,
    ) -> Result<DrawRequest, StoreError> {
        DrawRequestRepo::create(&self.pool, input)
            .await
            .map_err(|err| {
                let missing_project = matches!(
                    &err,
                    sqlx::Error::Database(db_err)
                        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
                );
                if missing_project {
                    StoreError::UnknownProject(input.project_id)
                } else {
                    StoreError::Database(err)
                }
            })
    }

    async fn update_draw_status(
        &self,
        id: DbId,
        status: DrawStatus,
    ) -> Result<Option<DrawRequest>, StoreError> {
        Ok(DrawRequestRepo::decide(&self.pool, id, status).await?)
    }
}
