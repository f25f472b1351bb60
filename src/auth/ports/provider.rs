//! Authentication provider port.

use crate::auth::domain::{Credentials, DisplayName, EmailAddress, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authentication provider operations.
pub type AuthProviderResult<T> = Result<T, AuthProviderError>;

/// Contract for the hosted authentication collaborator.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Registers a new account and returns its profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::EmailInUse`] when the address is already
    /// registered.
    async fn sign_up(
        &self,
        credentials: &Credentials,
        display_name: Option<DisplayName>,
    ) -> AuthProviderResult<User>;

    /// Verifies credentials and returns the matching profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthProviderError::InvalidCredentials`] when the email is
    /// unknown or the password does not match.
    async fn sign_in(&self, credentials: &Credentials) -> AuthProviderResult<User>;

    /// Ends the provider-side session for a user.
    async fn sign_out(&self, user_id: UserId) -> AuthProviderResult<()>;
}

/// Errors returned by authentication provider implementations.
#[derive(Debug, Clone, Error)]
pub enum AuthProviderError {
    /// An account already exists for the address.
    #[error("an account already exists for {0}")]
    EmailInUse(EmailAddress),

    /// The email or password is wrong.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Provider-side failure.
    #[error("authentication provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthProviderError {
    /// Wraps a provider failure.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
