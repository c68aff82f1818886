pub mod config;
pub mod launcher;
pub mod types;

pub use config::{CloudConfig, NodeProperties, SlotDefinition};
pub use launcher::{HasTargetHost, InboundLauncher, LaunchStrategy, SshLauncher};
pub use types::*;
