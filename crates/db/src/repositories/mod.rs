//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod draw_request_repo;
pub mod project_repo;

pub use draw_request_repo::DrawRequestRepo;
pub use project_repo::ProjectRepo;
