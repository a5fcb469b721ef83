pub mod dashboard;
pub mod draw_request;
pub mod forms;
pub mod project;
