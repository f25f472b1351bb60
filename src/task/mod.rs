//! Task boards for TaskZen.
//!
//! Tasks live in status columns of a project board. Their position is a
//! fractional `order` value computed by the ordering engine in
//! [`domain::ordering`]; every drag-and-drop gesture yields at most one
//! conditional write. The module follows hexagonal architecture:
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
