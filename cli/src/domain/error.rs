//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Slot errors ───────────────────────────────────────────────────────────────

/// Errors raised by a single VM slot or the pool that owns it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("Launcher '{kind}' of VM '{vm_id}' has no target host to set.")]
    NoTargetHost { vm_id: String, kind: &'static str },

    #[error("No slot configured for VM '{0}'.")]
    UnknownSlot(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors found while validating the slot file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Slot #{index} has an empty vm_id.")]
    EmptyVmId { index: usize },

    #[error("VM '{0}' is configured more than once.")]
    DuplicateVmId(String),
}
