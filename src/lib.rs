//! TaskZen: a multi-project Kanban board core.
//!
//! The crate holds the domain model, ordering engine and live-snapshot
//! machinery behind a Kanban board, with no UI dependencies.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: validated value types and pure business rules
//! - **Ports**: async traits for storage, identity and suggestions
//! - **Adapters**: in-memory stores and an HTTP suggestion client
//! - **Services**: orchestration that callers drive directly
//!
//! # Modules
//!
//! - [`auth`]: sign-in, sign-up and the observable session cell
//! - [`project`]: projects, membership and the colour palette
//! - [`task`]: tasks, board columns and drag-and-drop ordering
//! - [`mirror`]: debounced live snapshots of repository queries
//! - [`suggestion`]: model-backed priority suggestions
//! - [`config`]: layered TOML and environment configuration
//! - [`telemetry`]: `tracing` subscriber set-up

pub mod auth;
pub mod config;
pub mod mirror;
pub mod project;
pub mod suggestion;
pub mod task;
pub mod telemetry;
