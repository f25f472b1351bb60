//! Port contracts for authentication.
//!
//! Ports define infrastructure-agnostic interfaces used by the session
//! service.

pub mod provider;

pub use provider::{AuthProvider, AuthProviderError, AuthProviderResult};
