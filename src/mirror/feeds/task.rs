//! Live task list of one project.

use crate::mirror::{MirrorFeed, MirrorFeedError};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::Task,
    ports::{TaskChange, TaskRepository},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Tasks of a single project in display order.
pub struct TaskFeed<R> {
    repository: Arc<R>,
    project_id: ProjectId,
}

impl<R> TaskFeed<R>
where
    R: TaskRepository,
{
    /// Creates a feed over `project_id`'s tasks.
    #[must_use]
    pub const fn new(repository: Arc<R>, project_id: ProjectId) -> Self {
        Self {
            repository,
            project_id,
        }
    }

    /// Returns the watched project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }
}

#[async_trait]
impl<R> MirrorFeed for TaskFeed<R>
where
    R: TaskRepository + 'static,
{
    type Item = Task;
    type Notice = TaskChange;

    fn subscribe(&self) -> broadcast::Receiver<TaskChange> {
        self.repository.subscribe()
    }

    fn is_relevant(&self, notice: &TaskChange) -> bool {
        notice.project_id == self.project_id
    }

    async fn load(&self) -> Result<Vec<Task>, MirrorFeedError> {
        self.repository
            .list_by_project(self.project_id)
            .await
            .map_err(MirrorFeedError::load)
    }
}
