//! Service layer for project creation and membership-checked lookup.

use crate::auth::domain::UserId;
use crate::project::{
    domain::{
        NewProject, Project, ProjectColor, ProjectDescription, ProjectDomainError, ProjectId,
        ProjectName,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
    color: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            color: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the palette colour; the first palette entry is used otherwise.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn into_fields(self) -> Result<NewProject, ProjectDomainError> {
        let name = ProjectName::new(self.name)?;
        let description = match self.description {
            Some(text) => ProjectDescription::parse(text)?,
            None => None,
        };
        let color = self
            .color
            .map(ProjectColor::new)
            .transpose()?
            .unwrap_or_default();
        Ok(NewProject {
            name,
            description,
            color,
        })
    }
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    /// The user is not on the project's membership list.
    #[error("user {user_id} is not a member of project {project_id}")]
    NotMember {
        /// Requested project.
        project_id: ProjectId,
        /// Requesting user.
        user_id: UserId,
    },
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project orchestration service.
#[derive(Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a project owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] when validation fails or
    /// [`ProjectServiceError::Repository`] when the write is rejected.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
        owner_id: UserId,
    ) -> ProjectServiceResult<Project> {
        let draft = request.into_fields()?;
        let project = self
            .repository
            .store(draft, owner_id)
            .await
            .inspect_err(|err| {
                tracing::warn!(error = %err, "failed to create project");
            })?;
        tracing::info!(project_id = %project.id(), %owner_id, "project created");
        Ok(project)
    }

    /// Retrieves a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the lookup fails.
    pub async fn get_project(&self, id: ProjectId) -> ProjectServiceResult<Option<Project>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Retrieves a project the user is a member of.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] for unknown projects and
    /// [`ProjectServiceError::NotMember`] when the user is not listed.
    pub async fn get_project_for_member(
        &self,
        id: ProjectId,
        user_id: UserId,
    ) -> ProjectServiceResult<Project> {
        let project = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))?;
        if !project.is_member(user_id) {
            return Err(ProjectServiceError::NotMember {
                project_id: id,
                user_id,
            });
        }
        Ok(project)
    }

    /// Lists the user's projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the query fails.
    pub async fn list_projects(&self, user_id: UserId) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.repository.list_for_member(user_id).await?)
    }
}
