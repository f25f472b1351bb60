//! In-memory repository for task boards.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Revision, Task, TaskDraft, TaskId, TaskPatch, sort_partition},
    ports::{
        TaskChange, TaskChangeKind, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
    },
};

const DEFAULT_CHANGE_CAPACITY: usize = 256;

/// Thread-safe in-memory task repository with a change feed.
///
/// Timestamps come from the injected clock; revisions start at 1 and grow
/// by one per write.
pub struct InMemoryTaskRepository<C = DefaultClock> {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
    changes: broadcast::Sender<TaskChange>,
    clock: Arc<C>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            changes: self.changes.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self::with_clock_and_capacity(clock, DEFAULT_CHANGE_CAPACITY)
    }

    /// Creates an empty repository whose change feed buffers `capacity`
    /// notices per subscriber.
    #[must_use]
    pub fn with_clock_and_capacity(clock: Arc<C>, capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity.max(1));
        Self {
            state: Arc::default(),
            changes,
            clock,
        }
    }

    fn notify(&self, project_id: ProjectId, task_id: TaskId, kind: TaskChangeKind) {
        // Nobody listening is not an error.
        let _receivers = self.changes.send(TaskChange {
            project_id,
            task_id,
            kind,
        });
    }
}

fn poisoned(err: &impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn store(&self, project_id: ProjectId, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let task = Task::from_draft(TaskId::new(), project_id, draft, self.clock.utc());
        {
            let mut state = self.state.write().map_err(|err| poisoned(&err))?;
            state.insert(task.id(), task.clone());
        }
        self.notify(project_id, task.id(), TaskChangeKind::Created);
        Ok(task)
    }

    async fn update(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
        expected: Option<Revision>,
    ) -> TaskRepositoryResult<Task> {
        let updated = {
            let mut state = self.state.write().map_err(|err| poisoned(&err))?;
            let task = state
                .get_mut(&task_id)
                .filter(|task| task.project_id() == project_id)
                .ok_or(TaskRepositoryError::NotFound {
                    project_id,
                    task_id,
                })?;
            if let Some(revision) = expected
                && revision != task.revision()
            {
                return Err(TaskRepositoryError::RevisionConflict {
                    task_id,
                    expected: revision,
                    actual: task.revision(),
                });
            }
            task.apply_patch(patch, self.clock.utc());
            task.clone()
        };
        self.notify(project_id, task_id, TaskChangeKind::Updated);
        Ok(updated)
    }

    async fn delete(&self, project_id: ProjectId, task_id: TaskId) -> TaskRepositoryResult<()> {
        {
            let mut state = self.state.write().map_err(|err| poisoned(&err))?;
            let owned = state
                .get(&task_id)
                .is_some_and(|task| task.project_id() == project_id);
            if !owned {
                return Err(TaskRepositoryError::NotFound {
                    project_id,
                    task_id,
                });
            }
            state.remove(&task_id);
        }
        self.notify(project_id, task_id, TaskChangeKind::Deleted);
        Ok(())
    }

    async fn find_by_id(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state
            .get(&task_id)
            .filter(|task| task.project_id() == project_id)
            .cloned())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let mut tasks: Vec<Task> = state
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect();
        sort_partition(&mut tasks);
        Ok(tasks)
    }

    fn subscribe(&self) -> broadcast::Receiver<TaskChange> {
        self.changes.subscribe()
    }
}
