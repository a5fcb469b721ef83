//! Draw request (payment) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitedraw_core::ledger::LedgerDraw;
use sitedraw_core::status::DrawStatus;
use sitedraw_core::types::{DbId, Money, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `draw_requests` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DrawRequest {
    pub id: DbId,
    pub project_id: DbId,
    pub description: Option<String>,
    pub amount: Option<Money>,
    #[sqlx(rename = "status_id", try_from = "i16")]
    pub status: DrawStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A draw request joined with its owning project's name.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DrawRequestWithProject {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub draw: DrawRequest,
    pub project_name: Option<String>,
}

/// DTO for submitting a new draw request. Status is always Pending.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDrawRequest {
    pub project_id: DbId,
    pub description: Option<String>,
    #[validate(custom(function = "sitedraw_core::validation::check_money"))]
    pub amount: Option<Money>,
}

impl CreateDrawRequest {
    /// Drop a blank description.
    pub fn normalized(mut self) -> Self {
        self.description = self.description.filter(|d| !d.trim().is_empty());
        self
    }
}

impl LedgerDraw for DrawRequest {
    fn draw_project_id(&self) -> DbId {
        self.project_id
    }

    fn amount(&self) -> Option<Money> {
        self.amount
    }

    fn draw_status(&self) -> DrawStatus {
        self.status
    }
}

impl LedgerDraw for DrawRequestWithProject {
    fn draw_project_id(&self) -> DbId {
        self.draw.project_id
    }

    fn amount(&self) -> Option<Money> {
        self.draw.amount
    }

    fn draw_status(&self) -> DrawStatus {
        self.draw.status
    }
}
