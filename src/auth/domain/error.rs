//! Error types for credential and profile validation.

use thiserror::Error;

/// Errors returned while constructing authentication domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than the accepted minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted password length in characters.
        min: usize,
    },

    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

impl AuthDomainError {
    /// Returns the name of the form field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "email",
            Self::PasswordTooShort { .. } => "password",
            Self::EmptyDisplayName => "display_name",
        }
    }
}
