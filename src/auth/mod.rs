//! User identity and session state for TaskZen.
//!
//! Sessions are held in a single observable cell: the session service is
//! the only writer, and every consumer receives a read-only view that is
//! notified on sign-in and sign-out. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
