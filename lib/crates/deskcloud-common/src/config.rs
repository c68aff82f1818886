use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::launcher::LaunchStrategy;

/// Node properties are opaque to deskcloud and handed to the orchestrator as-is.
pub type NodeProperties = BTreeMap<String, serde_json::Value>;

/// One configured VM slot, as persisted in the slot file.
///
/// Only configuration lives here. Whether the VM is checked out, its last
/// observed power state and the bound agent name are runtime state and are
/// never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotDefinition {
    /// Identifier of the VM in the virtualization backend.
    pub vm_id: String,
    /// Space-separated labels jobs are matched against.
    #[serde(default)]
    pub labels: String,
    /// Agent working directory inside the VM.
    #[serde(default)]
    pub remote_fs: String,
    #[serde(default)]
    pub launcher: LaunchStrategy,
    /// Kept as a raw string so a bad value falls back to `Suspend` when the
    /// slot is built instead of failing the whole file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_build_behavior: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_properties: NodeProperties,
}

/// Top-level slot file (`~/.deskcloud/slots.yaml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    pub slots: Vec<SlotDefinition>,
}
