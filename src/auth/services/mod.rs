//! Application services for session management.

mod session;

pub use session::{SessionError, SessionResult, SessionService, SessionView};
