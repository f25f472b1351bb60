//! Suggestion inputs and outputs.

use super::SuggestionDomainError;
use crate::task::domain::TaskPriority;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task fields sent to the suggester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionRequest {
    title: String,
    description: String,
}

impl SuggestionRequest {
    /// Creates a request from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionDomainError::MissingTitle`] when the title is
    /// blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, SuggestionDomainError> {
        let raw_title = title.into();
        let trimmed = raw_title.trim();
        if trimmed.is_empty() {
            return Err(SuggestionDomainError::MissingTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            description: description.into().trim().to_owned(),
        })
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Priority levels a suggester may propose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Needs attention first.
    High,
}

impl PriorityLevel {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl From<PriorityLevel> for TaskPriority {
    fn from(level: PriorityLevel) -> Self {
        match level {
            PriorityLevel::Low => Self::Low,
            PriorityLevel::Medium => Self::Medium,
            PriorityLevel::High => Self::High,
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed priority with its justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritySuggestion {
    /// Proposed level.
    pub priority: PriorityLevel,
    /// Short explanation from the model.
    pub reason: String,
}

impl fmt::Display for PrioritySuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Suggested priority: {}. Reason: {}",
            self.priority, self.reason
        )
    }
}
