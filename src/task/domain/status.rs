//! Task status columns and priorities.
//!
//! Both enumerations are open: the well-known values have dedicated
//! variants and anything else is kept verbatim as a custom value.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns every board shows, in display order.
pub const DEFAULT_STATUSES: [TaskStatus; 3] =
    [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

/// Status column a task belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskStatus {
    /// Work not yet started.
    #[default]
    Todo,
    /// Work underway.
    InProgress,
    /// Work finished.
    Done,
    /// A board-specific column.
    Custom(String),
}

impl TaskStatus {
    /// Parses a status, recognising the default columns case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyStatus`] for blank input.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyStatus);
        }
        let status = match trimmed.to_ascii_lowercase().as_str() {
            "todo" => Self::Todo,
            "in-progress" => Self::InProgress,
            "done" => Self::Done,
            _ => Self::Custom(trimmed.to_owned()),
        };
        Ok(status)
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
            Self::Custom(value) => value,
        }
    }

    /// Returns the column heading shown on the board.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Todo => "To Do".to_owned(),
            Self::InProgress => "In Progress".to_owned(),
            Self::Done => "Done".to_owned(),
            Self::Custom(value) => capitalize(value),
        }
    }

    /// Returns `true` for one of [`DEFAULT_STATUSES`].
    #[must_use]
    pub const fn is_default(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaskStatus> for String {
    fn from(value: TaskStatus) -> Self {
        match value {
            TaskStatus::Custom(custom) => custom,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
    /// A board-specific priority label.
    Custom(String),
}

impl TaskPriority {
    /// Parses a priority, recognising the standard levels case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyPriority`] for blank input.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyPriority);
        }
        let priority = match trimmed.to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Custom(trimmed.to_owned()),
        };
        Ok(priority)
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Custom(value) => value,
        }
    }

    /// Returns the badge label shown on task cards.
    #[must_use]
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl TryFrom<String> for TaskPriority {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaskPriority> for String {
    fn from(value: TaskPriority) -> Self {
        match value {
            TaskPriority::Custom(custom) => custom,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
