//! Project aggregate root and its validated fields.

use super::{ProjectColor, ProjectDomainError, ProjectId};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_NAME_LENGTH: usize = 3;
const MAX_NAME_LENGTH: usize = 50;
const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Validated project name (3 to 50 characters after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NameTooShort`] or
    /// [`ProjectDomainError::NameTooLong`] when the trimmed length is out of
    /// range.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length < MIN_NAME_LENGTH {
            return Err(ProjectDomainError::NameTooShort {
                min: MIN_NAME_LENGTH,
            });
        }
        if length > MAX_NAME_LENGTH {
            return Err(ProjectDomainError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional free-text project description (at most 200 characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectDescription(String);

impl ProjectDescription {
    /// Creates a description, returning `None` for blank input.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DescriptionTooLong`] when the trimmed
    /// text exceeds the limit.
    pub fn parse(value: impl Into<String>) -> Result<Option<Self>, ProjectDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(ProjectDomainError::DescriptionTooLong {
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

/// Validated fields supplied when creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Project name.
    pub name: ProjectName,
    /// Optional description.
    pub description: Option<ProjectDescription>,
    /// Palette colour.
    pub color: ProjectColor,
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Option<ProjectDescription>,
    color: ProjectColor,
    owner_id: UserId,
    member_ids: Vec<UserId>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: ProjectName,
    /// Persisted description, if any.
    pub description: Option<ProjectDescription>,
    /// Persisted colour.
    pub color: ProjectColor,
    /// Persisted owner.
    pub owner_id: UserId,
    /// Persisted membership list.
    pub member_ids: Vec<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Materialises a freshly stored project owned by `owner_id`, who
    /// becomes its only member.
    #[must_use]
    pub fn from_draft(
        id: ProjectId,
        draft: NewProject,
        owner_id: UserId,
        stored_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            color: draft.color,
            owner_id,
            member_ids: vec![owner_id],
            created_at: stored_at,
        }
    }

    /// Reconstructs a project from persisted storage.
    ///
    /// The owner is re-inserted at the head of the membership list when
    /// missing, and duplicate members are dropped.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let mut member_ids = vec![data.owner_id];
        for member in data.member_ids {
            if !member_ids.contains(&member) {
                member_ids.push(member);
            }
        }
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            color: data.color,
            owner_id: data.owner_id,
            member_ids,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&ProjectDescription> {
        self.description.as_ref()
    }

    /// Returns the palette colour.
    #[must_use]
    pub const fn color(&self) -> &ProjectColor {
        &self.color
    }

    /// Returns the owner's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the membership list; the owner is always first.
    #[must_use]
    pub fn member_ids(&self) -> &[UserId] {
        &self.member_ids
    }

    /// Returns `true` when the user is on the membership list.
    #[must_use]
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.member_ids.contains(&user_id)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
