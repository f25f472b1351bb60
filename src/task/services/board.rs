//! Service layer for task CRUD and drag-and-drop placement.

use super::requests::{CreateTaskRequest, DropRequest, UpdateTaskRequest};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{
        BoardColumns, DropDecision, DropTarget, IgnoredDrop, OrderingPolicy, Task,
        TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskPlacement, TaskStatus,
        ordering::{append_order, needs_renumbering, plan_drop, renumber},
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// User-facing confirmation of an applied drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropNotice {
    /// The task changed column.
    MovedToColumn {
        /// Heading of the destination column.
        column: String,
    },
    /// The task was moved to the end of its own column.
    MovedToEnd {
        /// Heading of the column.
        column: String,
    },
    /// The task was placed before another task.
    Reordered,
}

impl fmt::Display for DropNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MovedToColumn { column } => write!(f, "Task moved to \"{column}\"."),
            Self::MovedToEnd { column } => write!(f, "Task moved to the end of \"{column}\"."),
            Self::Reordered => f.write_str("Task order updated within the column."),
        }
    }
}

/// Result of handling a drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was written.
    Ignored(IgnoredDrop),
    /// One write was issued.
    Applied {
        /// The task as stored after the write.
        task: Task,
        /// Confirmation text for the user.
        notice: DropNotice,
    },
}

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    policy: OrderingPolicy,
}

impl<R> TaskBoardService<R>
where
    R: TaskRepository,
{
    /// Creates a service with the default ordering policy.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_policy(repository, OrderingPolicy::default())
    }

    /// Creates a service with an explicit ordering policy.
    #[must_use]
    pub const fn with_policy(repository: Arc<R>, policy: OrderingPolicy) -> Self {
        Self { repository, policy }
    }

    /// Returns the ordering policy in effect.
    #[must_use]
    pub const fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// Creates a task at the end of its initial status column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when validation fails or
    /// [`TaskBoardError::Repository`] when the store rejects the write.
    pub async fn create_task(
        &self,
        project_id: ProjectId,
        request: CreateTaskRequest,
    ) -> TaskBoardResult<Task> {
        let fields = request.into_fields()?;
        let siblings = self.repository.list_by_project(project_id).await?;
        let order = append_order(
            siblings
                .iter()
                .filter(|task| *task.status() == fields.status)
                .map(Task::order),
        );
        let draft = TaskDraft {
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            due_date: fields.due_date,
            assigned_to: fields.assigned_to,
            order,
        };
        let task = self
            .repository
            .store(project_id, draft)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, %project_id, "failed to create task"))?;
        tracing::info!(
            task_id = %task.id(),
            %project_id,
            status = %task.status(),
            order = %task.order(),
            "task created"
        );
        Ok(task)
    }

    /// Applies an edit to a task.
    ///
    /// A status change appends the task to the destination column. The
    /// write is conditional on the request's expected revision, or on the
    /// revision read here when none was given. An edit that changes nothing
    /// returns the stored task without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when validation fails and
    /// [`TaskBoardError::Repository`] for unknown tasks, revision conflicts,
    /// or store failures.
    pub async fn update_task(
        &self,
        project_id: ProjectId,
        request: UpdateTaskRequest,
    ) -> TaskBoardResult<Task> {
        let task_id = request.task_id();
        let expected_revision = request.expected_revision();
        let mut patch = request.into_patch()?;
        let tasks = self.repository.list_by_project(project_id).await?;
        let current = find_task(&tasks, project_id, task_id)?;

        if patch.status.as_ref() == Some(current.status()) {
            patch.status = None;
        }
        if let Some(status) = patch.status.as_ref() {
            patch.order = Some(append_order(
                tasks
                    .iter()
                    .filter(|task| task.id() != task_id && task.status() == status)
                    .map(Task::order),
            ));
        }
        if patch.is_empty() {
            return Ok(current.clone());
        }

        let expected = expected_revision.unwrap_or_else(|| current.revision());
        let updated = self
            .repository
            .update(project_id, task_id, patch, Some(expected))
            .await
            .inspect_err(|err| tracing::warn!(error = %err, %task_id, "failed to update task"))?;
        tracing::info!(%task_id, revision = %updated.revision(), "task updated");
        Ok(updated)
    }

    /// Deletes a task. Remaining tasks keep their orders.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] for unknown tasks or store
    /// failures.
    pub async fn delete_task(&self, project_id: ProjectId, task_id: TaskId) -> TaskBoardResult<()> {
        self.repository
            .delete(project_id, task_id)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, %task_id, "failed to delete task"))?;
        tracing::info!(%task_id, %project_id, "task deleted");
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the lookup fails.
    pub async fn get_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskBoardResult<Option<Task>> {
        Ok(self.repository.find_by_id(project_id, task_id).await?)
    }

    /// Lists a project's tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the query fails.
    pub async fn list_tasks(&self, project_id: ProjectId) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list_by_project(project_id).await?)
    }

    /// Returns the project's tasks grouped into board columns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the query fails.
    pub async fn board(&self, project_id: ProjectId) -> TaskBoardResult<BoardColumns> {
        let tasks = self.repository.list_by_project(project_id).await?;
        Ok(BoardColumns::from_tasks(tasks))
    }

    /// Handles a drop gesture, issuing at most one placement write.
    ///
    /// When a reorder leaves two neighbours closer than the policy's epsilon
    /// the column is renumbered afterwards. A failed renumbering is logged
    /// and the drop is still reported as applied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the dragged task vanished,
    /// was moved concurrently, or the placement write fails.
    pub async fn apply_drop(&self, request: DropRequest) -> TaskBoardResult<DropOutcome> {
        let DropRequest {
            destination_project,
            payload,
            target,
        } = request;
        let tasks = self.repository.list_by_project(destination_project).await?;
        let column = placements_in(&tasks, target.status());

        let decision = plan_drop(&payload, destination_project, &target, &column);
        let (task_id, patch, notice) = match decision {
            DropDecision::Ignore(reason) => {
                tracing::debug!(%reason, "drop ignored");
                return Ok(DropOutcome::Ignored(reason));
            }
            DropDecision::Move {
                task_id,
                status,
                order,
            } => {
                let notice = DropNotice::MovedToColumn {
                    column: status.title(),
                };
                (task_id, TaskPatch::relocate(status, order), notice)
            }
            DropDecision::Reorder { task_id, order } => {
                let notice = match &target {
                    DropTarget::Column(status) => DropNotice::MovedToEnd {
                        column: status.title(),
                    },
                    DropTarget::Task(_) => DropNotice::Reordered,
                };
                (task_id, TaskPatch::reorder(order), notice)
            }
        };

        let current = find_task(&tasks, destination_project, task_id)?;
        let reordered = patch.status.is_none();
        let mut task = self
            .repository
            .update(destination_project, task_id, patch, Some(current.revision()))
            .await
            .inspect_err(|err| tracing::warn!(error = %err, %task_id, "drop write failed"))?;
        tracing::info!(
            %task_id,
            status = %task.status(),
            order = %task.order(),
            "task placed"
        );

        if reordered {
            let orders: Vec<_> = column
                .iter()
                .filter(|placement| placement.task_id != task_id)
                .map(|placement| placement.order)
                .chain(std::iter::once(task.order()))
                .collect();
            if needs_renumbering(&orders, self.policy.renumber_epsilon) {
                match self.respace_after_drop(destination_project, &task).await {
                    Ok(Some(refreshed)) => task = refreshed,
                    Ok(None) => {}
                    Err(err) => tracing::warn!(
                        error = %err,
                        %task_id,
                        "column renumbering failed; drop kept"
                    ),
                }
            }
        }

        Ok(DropOutcome::Applied { task, notice })
    }

    /// Renumbers the dropped task's column and re-reads the task.
    async fn respace_after_drop(
        &self,
        project_id: ProjectId,
        task: &Task,
    ) -> TaskBoardResult<Option<Task>> {
        self.renumber_status(project_id, task.status()).await?;
        Ok(self.repository.find_by_id(project_id, task.id()).await?)
    }

    /// Rewrites a status column to evenly spaced orders, keeping its
    /// sequence. Returns the number of tasks rewritten.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when a write conflicts or the
    /// store fails; tasks written before the failure keep their new order.
    pub async fn renumber_status(
        &self,
        project_id: ProjectId,
        status: &TaskStatus,
    ) -> TaskBoardResult<usize> {
        let tasks = self.repository.list_by_project(project_id).await?;
        let partition: Vec<&Task> = tasks.iter().filter(|task| task.status() == status).collect();
        let placements: Vec<TaskPlacement> =
            partition.iter().map(|task| TaskPlacement::from(*task)).collect();
        let changes = renumber(&placements, self.policy.renumber_spacing);

        for (task_id, order) in &changes {
            let revision = partition
                .iter()
                .find(|task| task.id() == *task_id)
                .map(|task| task.revision());
            self.repository
                .update(project_id, *task_id, TaskPatch::reorder(*order), revision)
                .await?;
        }
        tracing::info!(%project_id, %status, rewritten = changes.len(), "column renumbered");
        Ok(changes.len())
    }
}

fn find_task(tasks: &[Task], project_id: ProjectId, task_id: TaskId) -> TaskBoardResult<&Task> {
    tasks
        .iter()
        .find(|task| task.id() == task_id)
        .ok_or(TaskBoardError::Repository(TaskRepositoryError::NotFound {
            project_id,
            task_id,
        }))
}

fn placements_in(tasks: &[Task], status: &TaskStatus) -> Vec<TaskPlacement> {
    tasks
        .iter()
        .filter(|task| task.status() == status)
        .map(TaskPlacement::from)
        .collect()
}
