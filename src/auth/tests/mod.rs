//! Unit tests for the authentication module.

mod session_tests;
