//! Request payloads accepted by the task board service.

use crate::auth::domain::UserId;
use crate::project::domain::ProjectId;
use crate::task::domain::{
    DragPayload, DropTarget, Revision, TaskDescription, TaskDomainError, TaskId, TaskPatch,
    TaskPriority, TaskStatus, TaskTitle,
};
use chrono::{DateTime, Utc};

/// Request payload for creating a task.
///
/// Text fields hold raw form input; validation happens when the service
/// handles the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<UserId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            due_date: None,
            assigned_to: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status; `todo` is used otherwise.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority; `medium` is used otherwise.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Assigns the task to a user.
    #[must_use]
    pub const fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the raw priority, if set.
    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Replaces the priority in place.
    pub fn set_priority(&mut self, priority: &TaskPriority) {
        self.priority = Some(priority.as_str().to_owned());
    }

    pub(crate) fn into_fields(self) -> Result<ValidatedTask, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let description = self
            .description
            .map(TaskDescription::parse)
            .transpose()?
            .flatten();
        let status = self
            .status
            .as_deref()
            .map(TaskStatus::parse)
            .transpose()?
            .unwrap_or_default();
        let priority = self
            .priority
            .as_deref()
            .map(TaskPriority::parse)
            .transpose()?
            .unwrap_or_default();
        Ok(ValidatedTask {
            title,
            description,
            status,
            priority,
            due_date: self.due_date,
            assigned_to: self.assigned_to,
        })
    }
}

/// Validated creation fields still lacking an order.
pub(crate) struct ValidatedTask {
    pub(crate) title: TaskTitle,
    pub(crate) description: Option<TaskDescription>,
    pub(crate) status: TaskStatus,
    pub(crate) priority: TaskPriority,
    pub(crate) due_date: Option<DateTime<Utc>>,
    pub(crate) assigned_to: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Clearable<T> {
    Set(T),
    Clear,
}

impl<T> Clearable<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Clear => None,
        }
    }
}

/// Request payload for editing a task.
///
/// Unset fields are left untouched. A status change appends the task to the
/// end of the destination column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<Clearable<String>>,
    status: Option<String>,
    priority: Option<String>,
    due_date: Option<Clearable<DateTime<Utc>>>,
    assigned_to: Option<Clearable<UserId>>,
    expected_revision: Option<Revision>,
}

impl UpdateTaskRequest {
    /// Creates an empty edit of `task_id`.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
            status: None,
            priority: None,
            due_date: None,
            assigned_to: None,
            expected_revision: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description; blank text clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Clearable::Set(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(Clearable::Clear);
        self
    }

    /// Moves the task to another status column.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Clearable::Set(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(Clearable::Clear);
        self
    }

    /// Replaces the assignee.
    #[must_use]
    pub fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(Clearable::Set(user_id));
        self
    }

    /// Removes the assignee.
    #[must_use]
    pub fn clear_assignee(mut self) -> Self {
        self.assigned_to = Some(Clearable::Clear);
        self
    }

    /// Makes the write conditional on the task still being at `revision`.
    #[must_use]
    pub const fn expecting(mut self, revision: Revision) -> Self {
        self.expected_revision = Some(revision);
        self
    }

    /// Returns the task being edited.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the revision the caller expects, if any.
    #[must_use]
    pub const fn expected_revision(&self) -> Option<Revision> {
        self.expected_revision
    }

    /// Validates the edited fields into a patch without an order.
    pub(crate) fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let title = self.title.map(TaskTitle::new).transpose()?;
        let description = match self.description.map(Clearable::into_option) {
            Some(Some(text)) => Some(TaskDescription::parse(text)?),
            Some(None) => Some(None),
            None => None,
        };
        let status = self.status.as_deref().map(TaskStatus::parse).transpose()?;
        let priority = self
            .priority
            .as_deref()
            .map(TaskPriority::parse)
            .transpose()?;
        Ok(TaskPatch {
            title,
            description,
            status,
            priority,
            due_date: self.due_date.map(Clearable::into_option),
            assigned_to: self.assigned_to.map(Clearable::into_option),
            order: None,
        })
    }
}

/// A completed drag-and-drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRequest {
    /// Project whose board received the drop.
    pub destination_project: ProjectId,
    /// Data recorded when the drag started.
    pub payload: DragPayload,
    /// What the task was dropped onto.
    pub target: DropTarget,
}

impl DropRequest {
    /// Creates a drop request.
    #[must_use]
    pub const fn new(
        destination_project: ProjectId,
        payload: DragPayload,
        target: DropTarget,
    ) -> Self {
        Self {
            destination_project,
            payload,
            target,
        }
    }
}
