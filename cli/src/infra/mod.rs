//! Infrastructure layer — concrete implementations of application port traits.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` are forbidden.

pub mod config;
pub mod registry;
