//! Task aggregate root and its validated fields.

use super::{Revision, TaskDomainError, TaskId, TaskOrder, TaskPriority, TaskStatus};
use crate::auth::domain::UserId;
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_TITLE_LENGTH: usize = 3;
const MAX_TITLE_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validated task title (3 to 100 characters after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooShort`] or
    /// [`TaskDomainError::TitleTooLong`] when the trimmed length is out of
    /// range.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length < MIN_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooShort {
                min: MIN_TITLE_LENGTH,
            });
        }
        if length > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TitleTooLong {
                max: MAX_TITLE_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional free-text task description (at most 500 characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a description, returning `None` for blank input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the trimmed text
    /// exceeds the limit.
    pub fn parse(value: impl Into<String>) -> Result<Option<Self>, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(TaskDomainError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LENGTH,
            });
        }
        Ok(Some(Self(trimmed.to_owned())))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated fields of a task about to be stored.
///
/// Identifier, timestamps, and revision are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task title.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<TaskDescription>,
    /// Initial column.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: TaskPriority,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<UserId>,
    /// Initial sort key within the status partition.
    pub order: TaskOrder,
}

/// Partial update of a stored task.
///
/// `None` leaves a field untouched. Clearable fields use a nested option
/// where `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement or cleared description.
    pub description: Option<Option<TaskDescription>>,
    /// Replacement column.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement or cleared due date.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement or cleared assignee.
    pub assigned_to: Option<Option<UserId>>,
    /// Replacement sort key.
    pub order: Option<TaskOrder>,
}

impl TaskPatch {
    /// Creates a patch that changes only the order.
    #[must_use]
    pub fn reorder(order: TaskOrder) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    /// Creates a patch that moves the task to another column.
    #[must_use]
    pub fn relocate(status: TaskStatus, order: TaskOrder) -> Self {
        Self {
            status: Some(status),
            order: Some(order),
            ..Self::default()
        }
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.assigned_to.is_none()
            && self.order.is_none()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<UserId>,
    order: TaskOrder,
    revision: Revision,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted column.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Persisted sort key.
    pub order: TaskOrder,
    /// Persisted revision.
    pub revision: Revision,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materialises a draft as a freshly stored task at revision 1.
    #[must_use]
    pub fn from_draft(
        id: TaskId,
        project_id: ProjectId,
        draft: TaskDraft,
        stored_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            project_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            assigned_to: draft.assigned_to,
            order: draft.order,
            revision: Revision::INITIAL,
            created_at: stored_at,
            updated_at: stored_at,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            assigned_to: data.assigned_to,
            order: data.order,
            revision: data.revision,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Applies a patch as one persisted write, advancing the revision and
    /// the update timestamp.
    pub fn apply_patch(&mut self, patch: TaskPatch, stored_at: DateTime<Utc>) {
        let TaskPatch {
            title,
            description,
            status,
            priority,
            due_date,
            assigned_to,
            order,
        } = patch;
        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        if let Some(value) = assigned_to {
            self.assigned_to = value;
        }
        if let Some(value) = order {
            self.order = value;
        }
        self.revision = self.revision.next();
        self.updated_at = stored_at;
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the status column.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> &TaskPriority {
        &self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the sort key within the status partition.
    #[must_use]
    pub const fn order(&self) -> TaskOrder {
        self.order
    }

    /// Returns the current revision.
    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
