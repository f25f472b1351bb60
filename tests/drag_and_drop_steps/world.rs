//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskzen::{
    project::domain::ProjectId,
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{DropOutcome, TaskBoardError, TaskBoardService},
    },
};

/// Service type used by the BDD world.
pub type TestBoardService = TaskBoardService<InMemoryTaskRepository>;

/// Scenario world for drag-and-drop behaviour tests.
pub struct DragAndDropWorld {
    pub board: TestBoardService,
    pub project_id: Option<ProjectId>,
    pub last_drop: Option<Result<DropOutcome, TaskBoardError>>,
}

impl DragAndDropWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: TaskBoardService::new(Arc::new(InMemoryTaskRepository::new())),
            project_id: None,
            last_drop: None,
        }
    }

    /// Returns the scenario's project.
    ///
    /// # Errors
    ///
    /// Returns an error if no project has been set up yet.
    pub fn project(&self) -> Result<ProjectId, eyre::Report> {
        self.project_id
            .ok_or_else(|| eyre::eyre!("missing board project in scenario world"))
    }

    /// Looks up the stored task with the given title.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing fails or no task has that title.
    pub fn task_titled(&self, title: &str) -> Result<Task, eyre::Report> {
        let project_id = self.project()?;
        let tasks = run_async(self.board.list_tasks(project_id))?;
        tasks
            .into_iter()
            .find(|task| task.title().as_str() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title}"))
    }
}

impl Default for DragAndDropWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragAndDropWorld {
    DragAndDropWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
