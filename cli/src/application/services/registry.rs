//! Application service — descriptor registration.

use crate::application::ports::DescriptorRegistry;
use crate::domain::SlotDescriptor;

/// Register every configuration type this crate provides.
///
/// The registry is handed in by the caller; nothing is looked up globally.
pub fn register_descriptors(registry: &mut impl DescriptorRegistry) {
    registry.register(&SlotDescriptor);
    tracing::debug!(name = SlotDescriptor::DISPLAY_NAME, "registered slot descriptor");
}
