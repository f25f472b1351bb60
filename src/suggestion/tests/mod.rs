//! Unit tests for the suggestion module.

mod service_tests;
