//! HTML form submissions for creating projects and draw requests.
//!
//! Each form is a request-owned value holding the raw field strings exactly
//! as the browser posted them. Converting a form yields the typed create DTO
//! or a validation error naming the offending field.

use serde::Deserialize;
use sitedraw_core::error::CoreError;
use sitedraw_core::status::ProjectStatus;
use sitedraw_core::types::DbId;
use sitedraw_core::validation::{parse_money_field, validate_project_name};
use sitedraw_db::models::draw_request::CreateDrawRequest;
use sitedraw_db::models::project::CreateProject;

/// Fields of the "create project" form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectForm {
    pub name: String,
    /// Blank means unbudgeted.
    pub total_budget: String,
    /// Status label; blank means Not Started.
    pub status: String,
}

/// Fields of the "submit draw request" form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DrawRequestForm {
    pub project_id: String,
    pub description: String,
    /// Blank means no amount.
    pub amount: String,
}

impl ProjectForm {
    /// Parse into a create DTO.
    pub fn into_create(self) -> Result<CreateProject, CoreError> {
        validate_project_name(&self.name)?;
        let total_budget = parse_money_field(&self.total_budget, "total_budget")?;
        let status = match self.status.trim() {
            "" => ProjectStatus::default(),
            label => ProjectStatus::from_label(label)?,
        };

        Ok(CreateProject {
            name: self.name.trim().to_string(),
            description: None,
            total_budget,
            status: Some(status),
        })
    }
}

impl DrawRequestForm {
    /// Parse into a create DTO.
    pub fn into_create(self) -> Result<CreateDrawRequest, CoreError> {
        let project_id = match self.project_id.trim() {
            "" => return Err(CoreError::Validation("Project is required".to_string())),
            raw => raw.parse::<DbId>().map_err(|_| {
                CoreError::Validation(format!("project_id must be an integer, got '{raw}'"))
            })?,
        };
        let amount = parse_money_field(&self.amount, "amount")?;
        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());

        Ok(CreateDrawRequest {
            project_id,
            description,
            amount,
        })
    }
}
