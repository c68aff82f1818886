use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do with a VM once the build that used it has finished.
///
/// Serialized by variant name, which is also the value carried by the
/// descriptor's list items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PostBuildBehavior {
    #[default]
    Suspend,
    Stop,
    KeepRunning,
    ReturnPrevState,
}

impl PostBuildBehavior {
    pub const ALL: [PostBuildBehavior; 4] = [
        PostBuildBehavior::Suspend,
        PostBuildBehavior::Stop,
        PostBuildBehavior::KeepRunning,
        PostBuildBehavior::ReturnPrevState,
    ];

    /// Variant name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PostBuildBehavior::Suspend => "Suspend",
            PostBuildBehavior::Stop => "Stop",
            PostBuildBehavior::KeepRunning => "KeepRunning",
            PostBuildBehavior::ReturnPrevState => "ReturnPrevState",
        }
    }

    /// Resolve the power command to issue after a build.
    ///
    /// `prev_state` is the state the VM was observed in before the build.
    /// Only `ReturnPrevState` looks at it. A VM that was `Paused` is
    /// suspended, not paused: there is no pause command.
    #[must_use]
    pub fn command_for(self, prev_state: VmState) -> Option<PostBuildCommand> {
        match self {
            PostBuildBehavior::ReturnPrevState => match prev_state {
                VmState::Running => None,
                VmState::Stopped => Some(PostBuildCommand::Stop),
                VmState::Paused | VmState::Suspended => Some(PostBuildCommand::Suspend),
            },
            PostBuildBehavior::KeepRunning => None,
            PostBuildBehavior::Stop => Some(PostBuildCommand::Stop),
            PostBuildBehavior::Suspend => Some(PostBuildCommand::Suspend),
        }
    }
}

impl fmt::Display for PostBuildBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not the exact name of a [`PostBuildBehavior`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown post-build behavior '{0}' (expected Suspend, Stop, KeepRunning or ReturnPrevState)")]
pub struct ParseBehaviorError(pub String);

impl FromStr for PostBuildBehavior {
    type Err = ParseBehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostBuildBehavior::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| ParseBehaviorError(s.to_string()))
    }
}

/// Power state of a VM as reported by the virtualization backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum VmState {
    #[default]
    Suspended,
    Paused,
    Running,
    Stopped,
}

impl VmState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VmState::Suspended => "suspended",
            VmState::Paused => "paused",
            VmState::Running => "running",
            VmState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a backend state token to a [`VmState`].
///
/// Only the four exact lowercase tokens are recognised. Anything else
/// (including `"Running"` or an empty string) means the state is unknown.
#[must_use]
pub fn parse_vm_state(state: &str) -> Option<VmState> {
    match state {
        "stopped" => Some(VmState::Stopped),
        "paused" => Some(VmState::Paused),
        "running" => Some(VmState::Running),
        "suspended" => Some(VmState::Suspended),
        _ => None,
    }
}

/// Power command handed to the hypervisor control after a build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostBuildCommand {
    Stop,
    Suspend,
}

impl PostBuildCommand {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PostBuildCommand::Stop => "stop",
            PostBuildCommand::Suspend => "suspend",
        }
    }
}

impl fmt::Display for PostBuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
