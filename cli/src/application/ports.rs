//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `deskcloud_common`.

use std::path::PathBuf;

use anyhow::Result;
use deskcloud_common::{CloudConfig, PostBuildCommand};

use crate::domain::SlotDescriptor;

// ── Slot Store Port ───────────────────────────────────────────────────────────

/// Abstracts slot file persistence so tests never touch `~/.deskcloud`.
pub trait SlotStore {
    /// Load the slot file. A missing file yields an empty config.
    fn load(&self) -> Result<CloudConfig>;
    /// Persist the slot file.
    fn save(&self, config: &CloudConfig) -> Result<()>;
    /// Location of the slot file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Hypervisor Control Port ───────────────────────────────────────────────────

/// Drives the virtualization backend for one VM at a time.
#[allow(async_fn_in_trait)]
pub trait VmControl {
    /// Raw power state token reported by the backend (e.g. `"running"`).
    async fn query_state(&self, vm_id: &str) -> Result<String>;
    /// Start or resume the VM.
    async fn start(&self, vm_id: &str) -> Result<()>;
    /// Current IPv4 address of the VM.
    async fn resolve_ip(&self, vm_id: &str) -> Result<String>;
    /// Issue a post-build power command.
    async fn apply(&self, vm_id: &str, command: PostBuildCommand) -> Result<()>;
}

// ── Descriptor Registry Port ──────────────────────────────────────────────────

/// Receives configuration type descriptors at registration time.
pub trait DescriptorRegistry {
    fn register(&mut self, descriptor: &SlotDescriptor);
}
