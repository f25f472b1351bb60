//! Domain model for users, credentials, and session state.

mod error;
mod ids;
mod session;
mod user;

pub use error::AuthDomainError;
pub use ids::UserId;
pub use session::SessionState;
pub use user::{Credentials, DisplayName, EmailAddress, MIN_PASSWORD_LENGTH, User};
