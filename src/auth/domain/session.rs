//! Observable session state.

use super::{User, UserId};

/// Authentication state as seen by board consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The provider has not reported a session yet.
    #[default]
    Unknown,
    /// No user is signed in.
    SignedOut,
    /// A user is signed in.
    SignedIn(User),
}

impl SessionState {
    /// Returns the signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::Unknown | Self::SignedOut => None,
        }
    }

    /// Returns the signed-in user's identifier, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user().map(User::id)
    }

    /// Returns `true` while the initial session lookup is pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}
