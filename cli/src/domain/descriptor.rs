//! Descriptor for the VM slot configuration type.
//!
//! The orchestrator's configuration form uses it to show a name for the slot
//! type and to fill the post-build behavior drop-down.

use deskcloud_common::PostBuildBehavior;
use serde::Serialize;

/// One entry of a selectable list: what the user sees and what gets stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SlotDescriptor;

impl SlotDescriptor {
    pub const DISPLAY_NAME: &'static str = "Parallels Desktop virtual machine";

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    /// Items for the post-build behavior drop-down, one per behavior.
    #[must_use]
    pub fn post_build_behavior_items(&self) -> Vec<ListItem> {
        PostBuildBehavior::ALL
            .into_iter()
            .map(|behavior| ListItem {
                label: behavior_label(behavior),
                value: behavior.name(),
            })
            .collect()
    }
}

fn behavior_label(behavior: PostBuildBehavior) -> &'static str {
    match behavior {
        PostBuildBehavior::Suspend => "Suspend",
        PostBuildBehavior::Stop => "Stop",
        PostBuildBehavior::KeepRunning => "Keep running",
        PostBuildBehavior::ReturnPrevState => "Return to previous state",
    }
}
