//! In-process store for tests and local tooling.
//!
//! Mirrors the PostgreSQL store's semantics: ids are assigned on insert,
//! listings are newest first, draw inserts require an existing project, and
//! status updates only apply to Pending rows. Fetches can be made to fail to
//! exercise degraded paths.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use sitedraw_core::status::DrawStatus;
use sitedraw_core::types::DbId;
use tokio::sync::Mutex;

use super::{DrawRequestStore, ProjectStore, StoreError};
use crate::models::draw_request::{CreateDrawRequest, DrawRequest, DrawRequestWithProject};
use crate::models::project::{CreateProject, Project};

#[derive(Default)]
struct Tables {
    projects: Vec<Project>,
    draws: Vec<DrawRequest>,
    next_id: DbId,
}

impl Tables {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_project_fetch: AtomicBool,
    fail_draw_fetch: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `fetch_projects` fail until reset.
    pub fn fail_project_fetch(&self, fail: bool) {
        self.fail_project_fetch.store(fail, Ordering::SeqCst);
    }

    /// Make `fetch_draw_requests` fail until reset.
    pub fn fail_draw_fetch(&self, fail: bool) {
        self.fail_draw_fetch.store(fail, Ordering::SeqCst);
    }
}

impl ProjectStore for MemoryStore {
    async fn fetch_projects(&self) -> Result<Vec<Project>, StoreError> {
        if self.fail_project_fetch.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("project fetch disabled".to_string()));
        }
        let tables = self.tables.lock().await;
        Ok(tables.projects.iter().rev().cloned().collect())
    }

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_project(&self, input: &CreateProject) -> Result<Project, StoreError> {
        let mut tables = self.tables.lock().await;
        let now = Utc::now();
        let project = Project {
            id: tables.allocate_id(),
            name: Some(input.name.clone()),
            description: input.description.clone(),
            total_budget: input.total_budget,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        tables.projects.push(project.clone());
        Ok(project)
    }
}

impl DrawRequestStore for MemoryStore {
    async fn fetch_draw_requests(&self) -> Result<Vec<DrawRequestWithProject>, StoreError> {
        if self.fail_draw_fetch.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("draw request fetch disabled".to_string()));
        }
        let tables = self.tables.lock().await;
        Ok(tables
            .draws
            .iter()
            .rev()
            .map(|draw| DrawRequestWithProject {
                draw: draw.clone(),
                project_name: tables
                    .projects
                    .iter()
                    .find(|p| p.id == draw.project_id)
                    .and_then(|p| p.name.clone()),
            })
            .collect())
    }

    async fn fetch_project_draw_requests(
        &self,
        project_id: DbId,
    ) -> Result<Vec<DrawRequest>, StoreError> {
        if self.fail_draw_fetch.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("draw request fetch disabled".to_string()));
        }
        let tables = self.tables.lock().await;
        Ok(tables
            .draws
            .iter()
            .rev()
            .filter(|d| d.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn find_draw_request(&self, id: DbId) -> Result<Option<DrawRequest>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.draws.iter().find(|d| d.id == id).cloned())
    }

    async fn insert_draw_request(
        &self,
        input: &CreateDrawRequest,
    ) -> Result<DrawRequest, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.projects.iter().any(|p| p.id == input.project_id) {
            return Err(StoreError::UnknownProject(input.project_id));
        }
        let now = Utc::now();
        let draw = DrawRequest {
            id: tables.allocate_id(),
            project_id: input.project_id,
            description: input.description.clone(),
            amount: input.amount,
            status: DrawStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tables.draws.push(draw.clone());
        Ok(draw)
    }

    async fn update_draw_status(
        &self,
        id: DbId,
        status: DrawStatus,
    ) -> Result<Option<DrawRequest>, StoreError> {
        let mut tables = self.tables.lock().await;
        let Some(draw) = tables
            .draws
            .iter_mut()
            .find(|d| d.id == id && d.status == DrawStatus::Pending)
        else {
            return Ok(None);
        };
        draw.status = status;
        draw.updated_at = Utc::now();
        Ok(Some(draw.clone()))
    }
}
