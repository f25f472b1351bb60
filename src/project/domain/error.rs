//! Error types for project validation.

use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is shorter than three characters after trimming.
    #[error("project name must be at least {min} characters")]
    NameTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// The project name exceeds the length limit.
    #[error("project name must be at most {max} characters")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The description exceeds the length limit.
    #[error("project description must be at most {max} characters")]
    DescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The colour is not a `#rrggbb` hex code.
    #[error("invalid color hex code '{0}'")]
    InvalidColor(String),

    /// The colour is well formed but not part of the palette.
    #[error("color '{0}' is not part of the project palette")]
    ColorNotInPalette(String),
}

impl ProjectDomainError {
    /// Returns the name of the form field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } | Self::NameTooLong { .. } => "name",
            Self::DescriptionTooLong { .. } => "description",
            Self::InvalidColor(_) | Self::ColorNotInPalette(_) => "color",
        }
    }
}
