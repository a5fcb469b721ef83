//! Domain logic for SiteDraw: construction projects, their budgets, and the
//! draw requests paid out against them.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates depend on
//! it for status codes, validation rules and the ledger aggregator.

pub mod display;
pub mod error;
pub mod ledger;
pub mod status;
pub mod types;
pub mod validation;
