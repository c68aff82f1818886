//! Application service — slot file use-cases.

use anyhow::{Context, Result};
use deskcloud_common::CloudConfig;

use crate::application::pool::SlotPool;
use crate::application::ports::SlotStore;

/// Load the slot file.
pub fn load_config(store: &impl SlotStore) -> Result<CloudConfig> {
    store.load()
}

/// Save the slot file.
pub fn save_config(store: &impl SlotStore, config: &CloudConfig) -> Result<()> {
    store.save(config)
}

/// Load the slot file and build a validated pool from it.
pub fn load_pool(store: &impl SlotStore) -> Result<SlotPool> {
    let config = store.load()?;
    let path = store.path()?;
    SlotPool::from_config(&config).with_context(|| format!("invalid slot file {}", path.display()))
}

/// Slots whose `post_build_behavior` is set but not a known behavior.
///
/// Such slots still load (they fall back to `Suspend`); this lets `check`
/// point them out.
#[must_use]
pub fn invalid_behaviors(config: &CloudConfig) -> Vec<(String, String)> {
    config
        .slots
        .iter()
        .filter_map(|def| {
            let raw = def.post_build_behavior.as_deref()?;
            raw.parse::<deskcloud_common::PostBuildBehavior>()
                .is_err()
                .then(|| (def.vm_id.clone(), raw.to_string()))
        })
        .collect()
}
