//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.

pub mod descriptor;
pub mod error;
pub mod slot;

pub use descriptor::{ListItem, SlotDescriptor};
pub use error::{ConfigError, SlotError};
pub use slot::VmSlot;
