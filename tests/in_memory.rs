//! In-memory integration tests.
//!
//! Tests are organised into modules by functionality:
//! - `board_flow_tests`: sign-in through project creation to board edits
//! - `mirror_flow_tests`: live snapshots following repository writes

mod in_memory {
    pub mod helpers;

    mod board_flow_tests;
    mod mirror_flow_tests;
}
