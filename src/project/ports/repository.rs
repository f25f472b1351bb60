//! Repository port for project persistence and membership queries.

use crate::auth::domain::UserId;
use crate::project::domain::{NewProject, Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Change notice broadcast after every successful project write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectChange {
    /// The project that was written.
    pub project_id: ProjectId,
}

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project owned by `owner_id`.
    ///
    /// The repository assigns the identifier and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the
    /// assigned identifier already exists.
    async fn store(
        &self,
        draft: NewProject,
        owner_id: UserId,
    ) -> ProjectRepositoryResult<Project>;

    /// Finds a project by identifier.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every project listing the user as a member, newest first.
    async fn list_for_member(&self, user_id: UserId) -> ProjectRepositoryResult<Vec<Project>>;

    /// Subscribes to change notices for all projects.
    fn subscribe(&self) -> broadcast::Receiver<ProjectChange>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
