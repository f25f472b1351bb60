//! Repository port for task persistence and change notification.

use crate::project::domain::ProjectId;
use crate::task::domain::{Revision, Task, TaskDraft, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Kind of write a [`TaskChange`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChangeKind {
    /// A task was stored.
    Created,
    /// A task was updated.
    Updated,
    /// A task was deleted.
    Deleted,
}

/// Change notice broadcast after every successful task write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskChange {
    /// Project owning the task.
    pub project_id: ProjectId,
    /// The task that was written.
    pub task_id: TaskId,
    /// What happened to it.
    pub kind: TaskChangeKind,
}

/// Task persistence contract.
///
/// Implementations own identifier, timestamp, and revision assignment:
/// callers never supply them.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task in `project_id` and returns it as persisted.
    async fn store(&self, project_id: ProjectId, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Applies a partial update.
    ///
    /// When `expected` is given the write only happens if the stored
    /// revision still matches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown tasks and
    /// [`TaskRepositoryError::RevisionConflict`] when `expected` is stale.
    async fn update(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
        expected: Option<Revision>,
    ) -> TaskRepositoryResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown tasks.
    async fn delete(&self, project_id: ProjectId, task_id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task within a project.
    async fn find_by_id(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task of a project sorted by order, creation time, and
    /// identifier.
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Subscribes to change notices for all tasks.
    fn subscribe(&self) -> broadcast::Receiver<TaskChange>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No task with this identifier exists in the project.
    #[error("task {task_id} not found in project {project_id}")]
    NotFound {
        /// Project searched.
        project_id: ProjectId,
        /// Missing task.
        task_id: TaskId,
    },

    /// The stored revision differs from the one the writer read.
    #[error("task {task_id} changed concurrently: expected {expected}, found {actual}")]
    RevisionConflict {
        /// Task being written.
        task_id: TaskId,
        /// Revision the writer read.
        expected: Revision,
        /// Revision currently stored.
        actual: Revision,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
