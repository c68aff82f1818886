//! `deskcloud slots` — list configured VM slots.

use anyhow::Result;

use crate::application::ports::SlotStore;
use crate::application::services::config_service;

/// Run the slots command.
pub fn run(store: &impl SlotStore, json: bool) -> Result<()> {
    let pool = config_service::load_pool(store)?;
    let slots = pool.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }
    if slots.is_empty() {
        println!("No slots configured in {}", store.path()?.display());
        return Ok(());
    }
    for slot in &slots {
        let host = slot
            .host
            .as_deref()
            .map(|h| format!("  host={h}"))
            .unwrap_or_default();
        println!(
            "{}  behavior={}  launcher={}{host}  remote_fs={}  labels=[{}]",
            slot.vm_id, slot.post_build_behavior, slot.launcher, slot.remote_fs, slot.labels
        );
    }
    Ok(())
}
