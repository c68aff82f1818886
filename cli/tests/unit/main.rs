//! Unit tests for deskcloud
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod architecture;
mod slot_store;
