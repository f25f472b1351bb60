//! In-memory authentication provider for tests and local runs.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{Credentials, DisplayName, EmailAddress, User, UserId},
    ports::{AuthProvider, AuthProviderError, AuthProviderResult},
};

/// Thread-safe in-memory account store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthProvider {
    state: Arc<RwLock<HashMap<EmailAddress, Account>>>,
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password_digest: [u8; 32],
}

impl InMemoryAuthProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn digest_password(email: &EmailAddress, password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(email.as_str().as_bytes());
    hasher.update([0_u8]);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

fn poisoned(err: &impl ToString) -> AuthProviderError {
    AuthProviderError::provider(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn sign_up(
        &self,
        credentials: &Credentials,
        display_name: Option<DisplayName>,
    ) -> AuthProviderResult<User> {
        let mut accounts = self.state.write().map_err(|err| poisoned(&err))?;
        let email = credentials.email();
        if accounts.contains_key(email) {
            return Err(AuthProviderError::EmailInUse(email.clone()));
        }

        let user = User::new(UserId::new(), email.clone(), display_name);
        accounts.insert(
            email.clone(),
            Account {
                user: user.clone(),
                password_digest: digest_password(email, credentials.password()),
            },
        );
        Ok(user)
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthProviderResult<User> {
        let accounts = self.state.read().map_err(|err| poisoned(&err))?;
        let account = accounts
            .get(credentials.email())
            .ok_or(AuthProviderError::InvalidCredentials)?;
        if account.password_digest != digest_password(credentials.email(), credentials.password())
        {
            return Err(AuthProviderError::InvalidCredentials);
        }
        Ok(account.user.clone())
    }

    async fn sign_out(&self, _user_id: UserId) -> AuthProviderResult<()> {
        Ok(())
    }
}
