//! Application services for project creation and lookup.

mod projects;

pub use projects::{CreateProjectRequest, ProjectService, ProjectServiceError, ProjectServiceResult};
