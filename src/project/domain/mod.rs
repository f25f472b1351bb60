//! Domain model for projects and their membership lists.

mod color;
mod error;
mod ids;
mod project;

pub use color::{PROJECT_PALETTE, ProjectColor};
pub use error::ProjectDomainError;
pub use ids::ProjectId;
pub use project::{NewProject, PersistedProjectData, Project, ProjectDescription, ProjectName};
