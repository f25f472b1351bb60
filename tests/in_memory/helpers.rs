//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskzen::{
    auth::{adapters::memory::InMemoryAuthProvider, domain::User, services::SessionService},
    project::{
        adapters::memory::InMemoryProjectRepository,
        domain::Project,
        services::{CreateProjectRequest, ProjectService},
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{CreateTaskRequest, TaskBoardService},
    },
};

/// Everything a signed-in board screen talks to.
pub struct Workspace {
    pub session: SessionService<InMemoryAuthProvider>,
    pub projects: ProjectService<InMemoryProjectRepository>,
    pub project_repository: Arc<InMemoryProjectRepository>,
    pub board: TaskBoardService<InMemoryTaskRepository>,
    pub task_repository: Arc<InMemoryTaskRepository>,
}

/// Provides fresh, empty stores for each test.
#[fixture]
pub fn workspace() -> Workspace {
    let project_repository = Arc::new(InMemoryProjectRepository::new());
    let task_repository = Arc::new(InMemoryTaskRepository::new());
    Workspace {
        session: SessionService::new(Arc::new(InMemoryAuthProvider::new())),
        projects: ProjectService::new(Arc::clone(&project_repository)),
        project_repository,
        board: TaskBoardService::new(Arc::clone(&task_repository)),
        task_repository,
    }
}

impl Workspace {
    /// Signs up a user and creates one project they own.
    ///
    /// # Errors
    ///
    /// Returns an error if sign-up or project creation fails.
    pub async fn signed_in_with_project(
        &self,
        email: &str,
        project_name: &str,
    ) -> Result<(User, Project), eyre::Report> {
        let user = self.session.sign_up(email, "hunter22", None).await?;
        let project = self
            .projects
            .create_project(CreateProjectRequest::new(project_name), user.id())
            .await?;
        Ok((user, project))
    }

    /// Creates tasks with the given titles in the default column.
    ///
    /// # Errors
    ///
    /// Returns an error if any creation fails.
    pub async fn seed_tasks(
        &self,
        project: &Project,
        titles: &[&str],
    ) -> Result<Vec<Task>, eyre::Report> {
        let mut created = Vec::with_capacity(titles.len());
        for title in titles {
            created.push(
                self.board
                    .create_task(project.id(), CreateTaskRequest::new(*title))
                    .await?,
            );
        }
        Ok(created)
    }
}

/// Titles of `tasks` in the given sequence.
#[must_use]
pub fn titles(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}
