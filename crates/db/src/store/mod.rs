//! Narrow store interface over projects and draw requests.
//!
//! The ledger loader and the HTTP handlers read and write through these
//! traits, so tests can swap the PostgreSQL store for [`MemoryStore`].

mod memory;
mod pg;

use std::future::Future;

use sitedraw_core::status::DrawStatus;
use sitedraw_core::types::DbId;

use crate::models::draw_request::{CreateDrawRequest, DrawRequest, DrawRequestWithProject};
use crate::models::project::{CreateProject, Project};

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Errors surfaced by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The referenced project does not exist.
    #[error("Project {0} does not exist")]
    UnknownProject(DbId),

    /// The backing service could not be reached or refused the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fetch and insert projects. Projects are never updated.
pub trait ProjectStore: Send + Sync {
    /// All projects, most recently created first.
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>, StoreError>> + Send;

    fn find_project(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Project>, StoreError>> + Send;

    fn insert_project(
        &self,
        input: &CreateProject,
    ) -> impl Future<Output = Result<Project, StoreError>> + Send;
}

/// Fetch, insert and decide draw requests.
pub trait DrawRequestStore: Send + Sync {
    /// All draw requests, most recently created first, joined with project names.
    fn fetch_draw_requests(
        &self,
    ) -> impl Future<Output = Result<Vec<DrawRequestWithProject>, StoreError>> + Send;

    /// Draw requests of one project, most recently created first.
    fn fetch_project_draw_requests(
        &self,
        project_id: DbId,
    ) -> impl Future<Output = Result<Vec<DrawRequest>, StoreError>> + Send;

    fn find_draw_request(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<DrawRequest>, StoreError>> + Send;

    /// Insert a Pending draw request. Fails with [`StoreError::UnknownProject`]
    /// when `input.project_id` does not exist.
    fn insert_draw_request(
        &self,
        input: &CreateDrawRequest,
    ) -> impl Future<Output = Result<DrawRequest, StoreError>> + Send;

    /// Move a Pending draw request to `status`. Returns `None` when the draw
    /// does not exist or is no longer Pending.
    fn update_draw_status(
        &self,
        id: DbId,
        status: DrawStatus,
    ) -> impl Future<Output = Result<Option<DrawRequest>, StoreError>> + Send;
}
