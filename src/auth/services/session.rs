//! Session service owning the process-wide session cell.

use crate::auth::{
    domain::{AuthDomainError, Credentials, DisplayName, SessionState, User},
    ports::{AuthProvider, AuthProviderError},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Credential or profile validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),
    /// The authentication provider rejected the request.
    #[error(transparent)]
    Provider(#[from] AuthProviderError),
    /// Sign-out was requested with nobody signed in.
    #[error("no user is signed in")]
    NotSignedIn,
}

/// Result type for session service operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Read-only view of the session cell.
///
/// Views are cheap to clone; each one observes every state published by
/// the owning [`SessionService`].
#[derive(Debug, Clone)]
pub struct SessionView {
    receiver: watch::Receiver<SessionState>,
}

impl SessionView {
    /// Returns a copy of the current session state.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.receiver.borrow().clone()
    }

    /// Waits until the session state changes and returns the new value.
    ///
    /// Returns `None` once the owning service has been dropped.
    pub async fn changed(&mut self) -> Option<SessionState> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

/// Single writer of the session cell.
pub struct SessionService<P>
where
    P: AuthProvider,
{
    provider: Arc<P>,
    cell: watch::Sender<SessionState>,
}

impl<P> SessionService<P>
where
    P: AuthProvider,
{
    /// Creates a service whose session state is [`SessionState::Unknown`]
    /// until [`resume`](Self::resume) or a sign-in publishes a value.
    #[must_use]
    pub fn new(provider: Arc<P>) -> Self {
        let (cell, _) = watch::channel(SessionState::Unknown);
        Self { provider, cell }
    }

    /// Returns a read-only view of the session cell.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            receiver: self.cell.subscribe(),
        }
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.cell.borrow().user().cloned()
    }

    /// Publishes the session restored by the provider at start-up.
    pub fn resume(&self, user: Option<User>) {
        let state = user.map_or(SessionState::SignedOut, SessionState::SignedIn);
        self.publish(state);
    }

    /// Registers a new account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Domain`] for invalid input and
    /// [`SessionError::Provider`] when the provider rejects the account.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> SessionResult<User> {
        let credentials = Credentials::new(email, password)?;
        let name = display_name.map(DisplayName::new).transpose()?;
        let user = self.provider.sign_up(&credentials, name).await?;
        tracing::info!(user_id = %user.id(), "account created");
        self.publish(SessionState::SignedIn(user.clone()));
        Ok(user)
    }

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Domain`] for malformed input and
    /// [`SessionError::Provider`] when the credentials are rejected.
    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<User> {
        let credentials = Credentials::new(email, password)?;
        let user = self.provider.sign_in(&credentials).await?;
        tracing::info!(user_id = %user.id(), "signed in");
        self.publish(SessionState::SignedIn(user.clone()));
        Ok(user)
    }

    /// Signs the current user out and clears the session cell.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotSignedIn`] when nobody is signed in, or
    /// [`SessionError::Provider`] when the provider fails; the cell keeps
    /// its previous value in that case.
    pub async fn sign_out(&self) -> SessionResult<()> {
        let user_id = self
            .cell
            .borrow()
            .user_id()
            .ok_or(SessionError::NotSignedIn)?;
        self.provider.sign_out(user_id).await?;
        tracing::info!(%user_id, "signed out");
        self.publish(SessionState::SignedOut);
        Ok(())
    }

    fn publish(&self, state: SessionState) {
        self.cell.send_replace(state);
    }
}
