//! Port contracts for project persistence.

pub mod repository;

pub use repository::{
    ProjectChange, ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult,
};
