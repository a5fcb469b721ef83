//! Input validation rules for submissions (projects and draw requests).
//!
//! The ledger itself never validates; these checks run before anything is
//! inserted. The `validate_*` helpers return [`CoreError::Validation`], and
//! the `check_*` functions plug into `#[derive(validator::Validate)]` DTOs.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::Money;

/// Maximum length (in characters) of a project name.
pub const MAX_PROJECT_NAME_LEN: usize = 200;

/// Amounts are entered with cents precision.
pub const MONEY_SCALE: u32 = 2;

/// Validate a project name: required, not blank, at most [`MAX_PROJECT_NAME_LEN`] chars.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Project name is required".to_string()));
    }
    let len = trimmed.chars().count();
    if len > MAX_PROJECT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Project name must be at most {MAX_PROJECT_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Largest amount a `NUMERIC(14,2)` column holds.
pub const MAX_MONEY: Money = Decimal::from_parts(276_447_231, 23_283, 0, false, MONEY_SCALE);

/// What is wrong with an amount, if anything. The message has no field name.
fn money_problem(value: Money) -> Option<String> {
    if value.is_sign_negative() && !value.is_zero() {
        return Some(format!("must not be negative, got {value}"));
    }
    if value.normalize().scale() > MONEY_SCALE {
        return Some(format!(
            "must have at most {MONEY_SCALE} decimal places, got {value}"
        ));
    }
    if value > MAX_MONEY {
        return Some(format!("must be at most {MAX_MONEY}, got {value}"));
    }
    None
}

/// Validate a monetary amount: non-negative, at most two decimal places and
/// no larger than [`MAX_MONEY`].
pub fn validate_money(value: Money, field: &str) -> Result<(), CoreError> {
    match money_problem(value) {
        Some(problem) => Err(CoreError::Validation(format!("{field} {problem}"))),
        None => Ok(()),
    }
}

/// Parse a money field as typed into a form.
///
/// Blank input means "absent" and yields `Ok(None)`.
pub fn parse_money_field(raw: &str, field: &str) -> Result<Option<Money>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: Decimal = trimmed
        .parse()
        .map_err(|_| CoreError::Validation(format!("{field} must be a number, got '{trimmed}'")))?;
    validate_money(value, field)?;
    Ok(Some(value))
}

/// `validator` hook: reject blank strings.
pub fn check_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// `validator` hook: reject negative, oversized and sub-cent amounts.
///
/// `describe_errors` prefixes the field name, so the message omits it.
pub fn check_money(value: &Money) -> Result<(), ValidationError> {
    match money_problem(*value) {
        Some(problem) => Err(ValidationError::new("money").with_message(Cow::Owned(problem))),
        None => Ok(()),
    }
}

/// Flatten `validator` errors into one deterministic, human-readable line.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", err.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
