//! Error types for task validation.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The title is shorter than the minimum after trimming.
    #[error("title must be at least {min} characters")]
    TitleTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// The title exceeds the length limit.
    #[error("title must be at most {max} characters")]
    TitleTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The description exceeds the length limit.
    #[error("description must be at most {max} characters")]
    DescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The status is empty after trimming.
    #[error("invalid status: status must not be empty")]
    EmptyStatus,

    /// The priority is empty after trimming.
    #[error("invalid priority: priority must not be empty")]
    EmptyPriority,

    /// An order value is NaN or infinite.
    #[error("order value must be finite, got {0}")]
    NonFiniteOrder(f64),
}

impl TaskDomainError {
    /// Returns the name of the form field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::TitleTooShort { .. } | Self::TitleTooLong { .. } => "title",
            Self::DescriptionTooLong { .. } => "description",
            Self::EmptyStatus => "status",
            Self::EmptyPriority => "priority",
            Self::NonFiniteOrder(_) => "order",
        }
    }
}
