//! A single configured VM slot and its runtime bookkeeping.
//!
//! Pure state: no I/O, no async. The application layer drives the
//! checkout → build → release cycle and talks to the hypervisor.

use chrono::{DateTime, Utc};
use deskcloud_common::{
    LaunchStrategy, NodeProperties, PostBuildBehavior, PostBuildCommand, SlotDefinition, VmState,
};

use crate::domain::error::SlotError;

/// One VM made available to the orchestrator as an agent host.
#[derive(Debug, Clone)]
pub struct VmSlot {
    vm_id: String,
    labels: String,
    remote_fs: String,
    launcher: LaunchStrategy,
    node_properties: NodeProperties,
    post_build_behavior: PostBuildBehavior,
    // Runtime state, not persisted.
    prev_vm_state: VmState,
    agent_name: Option<String>,
    checked_out: bool,
    checked_out_at: Option<DateTime<Utc>>,
}

impl VmSlot {
    /// Build a slot from its configured values.
    ///
    /// `post_build_behavior` must be the exact variant name of a
    /// [`PostBuildBehavior`]. A missing or unrecognised value is logged and
    /// the slot falls back to `Suspend`.
    #[must_use]
    pub fn new(
        vm_id: impl Into<String>,
        labels: impl Into<String>,
        remote_fs: impl Into<String>,
        launcher: LaunchStrategy,
        post_build_behavior: Option<&str>,
        node_properties: NodeProperties,
    ) -> Self {
        let vm_id = vm_id.into();
        let post_build_behavior = match post_build_behavior.map(str::parse::<PostBuildBehavior>) {
            Some(Ok(behavior)) => behavior,
            Some(Err(e)) => {
                tracing::error!(vm_id = %vm_id, error = %e, "falling back to Suspend");
                PostBuildBehavior::Suspend
            }
            None => {
                tracing::error!(vm_id = %vm_id, "no post-build behavior set, falling back to Suspend");
                PostBuildBehavior::Suspend
            }
        };
        Self {
            vm_id,
            labels: labels.into(),
            remote_fs: remote_fs.into(),
            launcher,
            node_properties,
            post_build_behavior,
            prev_vm_state: VmState::Suspended,
            agent_name: None,
            checked_out: false,
            checked_out_at: None,
        }
    }

    #[must_use]
    pub fn from_definition(def: SlotDefinition) -> Self {
        Self::new(
            def.vm_id,
            def.labels,
            def.remote_fs,
            def.launcher,
            def.post_build_behavior.as_deref(),
            def.node_properties,
        )
    }

    /// Persisted form of this slot. Runtime state is left out.
    #[must_use]
    pub fn to_definition(&self) -> SlotDefinition {
        SlotDefinition {
            vm_id: self.vm_id.clone(),
            labels: self.labels.clone(),
            remote_fs: self.remote_fs.clone(),
            launcher: self.launcher.clone(),
            post_build_behavior: Some(self.post_build_behavior.name().to_string()),
            node_properties: self.node_properties.clone(),
        }
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn vm_id(&self) -> &str {
        &self.vm_id
    }

    #[must_use]
    pub fn labels(&self) -> &str {
        &self.labels
    }

    /// Individual labels, split on whitespace.
    pub fn label_set(&self) -> impl Iterator<Item = &str> {
        self.labels.split_whitespace()
    }

    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.label_set().any(|l| l == label)
    }

    /// `None` matches any slot; otherwise the label must be one of ours.
    #[must_use]
    pub fn matches_label(&self, label: Option<&str>) -> bool {
        label.is_none_or(|l| self.has_label(l))
    }

    #[must_use]
    pub fn remote_fs(&self) -> &str {
        &self.remote_fs
    }

    #[must_use]
    pub fn launcher(&self) -> &LaunchStrategy {
        &self.launcher
    }

    #[must_use]
    pub fn node_properties(&self) -> &NodeProperties {
        &self.node_properties
    }

    pub fn set_node_properties(&mut self, node_properties: NodeProperties) {
        self.node_properties = node_properties;
    }

    #[must_use]
    pub fn post_build_behavior(&self) -> PostBuildBehavior {
        self.post_build_behavior
    }

    #[must_use]
    pub fn post_build_behavior_name(&self) -> &'static str {
        self.post_build_behavior.name()
    }

    // ── Runtime state ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn prev_vm_state(&self) -> VmState {
        self.prev_vm_state
    }

    /// Record the power state the VM was in before the build.
    pub fn set_prev_vm_state(&mut self, state: VmState) {
        self.prev_vm_state = state;
    }

    #[must_use]
    pub fn agent_name(&self) -> Option<&str> {
        self.agent_name.as_deref()
    }

    pub fn set_agent_name(&mut self, name: impl Into<String>) {
        self.agent_name = Some(name.into());
    }

    /// Command to send to the hypervisor once the build is done.
    #[must_use]
    pub fn post_build_command(&self) -> Option<PostBuildCommand> {
        self.post_build_behavior.command_for(self.prev_vm_state)
    }

    pub fn mark_provisioned(&mut self) {
        self.checked_out = true;
        self.checked_out_at = Some(Utc::now());
    }

    #[must_use]
    pub fn is_provisioned(&self) -> bool {
        self.checked_out
    }

    #[must_use]
    pub fn checked_out_at(&self) -> Option<DateTime<Utc>> {
        self.checked_out_at
    }

    /// The agent bound to this slot went away. Safe to call repeatedly.
    pub fn on_agent_released(&mut self) {
        self.checked_out = false;
        self.checked_out_at = None;
        self.agent_name = None;
    }

    // ── Launcher address ──────────────────────────────────────────────────────

    /// Point the launcher at the VM's freshly observed address.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::NoTargetHost`] if the launcher has no target
    /// host. The launcher is left untouched in that case.
    pub fn set_launcher_ip(&mut self, ip: &str) -> Result<(), SlotError> {
        let kind = self.launcher.kind();
        let target = self
            .launcher
            .as_target_host_mut()
            .ok_or_else(|| SlotError::NoTargetHost {
                vm_id: self.vm_id.clone(),
                kind,
            })?;
        target.set_target_host(ip);
        Ok(())
    }

    /// Address the launcher currently targets, if it has one.
    #[must_use]
    pub fn launcher_ip(&self) -> Option<&str> {
        self.launcher.as_target_host()?.target_host()
    }
}
