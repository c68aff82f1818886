//! Application services — use-case orchestration.

pub mod config_service;
pub mod lifecycle;
pub mod registry;
