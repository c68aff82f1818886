//! In-process `DescriptorRegistry` that keeps what it was given for display.

use serde::Serialize;

use crate::application::ports::DescriptorRegistry;
use crate::domain::{ListItem, SlotDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredDescriptor {
    pub display_name: &'static str,
    pub post_build_behaviors: Vec<ListItem>,
}

#[derive(Debug, Default)]
pub struct ListingRegistry {
    entries: Vec<RegisteredDescriptor>,
}

impl ListingRegistry {
    #[must_use]
    pub fn entries(&self) -> &[RegisteredDescriptor] {
        &self.entries
    }
}

impl DescriptorRegistry for ListingRegistry {
    fn register(&mut self, descriptor: &SlotDescriptor) {
        self.entries.push(RegisteredDescriptor {
            display_name: descriptor.display_name(),
            post_build_behaviors: descriptor.post_build_behavior_items(),
        });
    }
}
