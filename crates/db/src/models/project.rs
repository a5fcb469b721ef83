//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitedraw_core::ledger::LedgerProject;
use sitedraw_core::status::ProjectStatus;
use sitedraw_core::types::{DbId, Money, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub total_budget: Option<Money>,
    #[sqlx(rename = "status_id", try_from = "i16")]
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(
        length(max = 200),
        custom(function = "sitedraw_core::validation::check_not_blank")
    )]
    pub name: String,
    pub description: Option<String>,
    #[validate(custom(function = "sitedraw_core::validation::check_money"))]
    pub total_budget: Option<Money>,
    /// Defaults to Not Started if omitted.
    pub status: Option<ProjectStatus>,
}

impl CreateProject {
    /// Trim the name and drop a blank description.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.description = self.description.filter(|d| !d.trim().is_empty());
        self
    }
}

impl LedgerProject for Project {
    fn project_id(&self) -> DbId {
        self.id
    }

    fn project_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn total_budget(&self) -> Option<Money> {
        self.total_budget
    }

    fn project_status(&self) -> ProjectStatus {
        self.status
    }
}
