//! Unit tests for the collection mirror.
