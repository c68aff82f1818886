//! Agent launch strategies.
//!
//! A launch strategy describes how the orchestrator starts the remote agent
//! process once the VM is reachable. Strategies that connect out to the VM
//! need its address, which is only known after the VM has booted; they
//! expose it through [`HasTargetHost`].

use serde::{Deserialize, Serialize};

/// Capability of a launch strategy whose target address can be patched
/// after construction.
pub trait HasTargetHost {
    /// Currently configured target host, if one has been set.
    fn target_host(&self) -> Option<&str>;
    /// Replace the target host.
    fn set_target_host(&mut self, host: &str);
}

/// Start the agent over SSH.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SshLauncher {
    /// Usually empty in the config file and filled in from the VM's IP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default = "default_ssh_port")]
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jvm_options: Option<String>,
}

fn default_ssh_port() -> u16 {
    22
}

impl Default for SshLauncher {
    fn default() -> Self {
        Self {
            host: None,
            port: default_ssh_port(),
            credentials_id: None,
            java_path: None,
            jvm_options: None,
        }
    }
}

impl HasTargetHost for SshLauncher {
    fn target_host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    fn set_target_host(&mut self, host: &str) {
        self.host = Some(host.to_string());
    }
}

/// The agent dials in to the orchestrator; there is no address to patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundLauncher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_args: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LaunchStrategy {
    Ssh(SshLauncher),
    Inbound(InboundLauncher),
}

impl Default for LaunchStrategy {
    fn default() -> Self {
        LaunchStrategy::Ssh(SshLauncher::default())
    }
}

impl LaunchStrategy {
    /// Short name used in listings and log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchStrategy::Ssh(_) => "ssh",
            LaunchStrategy::Inbound(_) => "inbound",
        }
    }

    /// The target-host capability, for strategies that have one.
    #[must_use]
    pub fn as_target_host(&self) -> Option<&dyn HasTargetHost> {
        match self {
            LaunchStrategy::Ssh(ssh) => Some(ssh),
            LaunchStrategy::Inbound(_) => None,
        }
    }

    #[must_use]
    pub fn as_target_host_mut(&mut self) -> Option<&mut dyn HasTargetHost> {
        match self {
            LaunchStrategy::Ssh(ssh) => Some(ssh),
            LaunchStrategy::Inbound(_) => None,
        }
    }
}
