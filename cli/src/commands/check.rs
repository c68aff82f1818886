//! `deskcloud check` — validate the slot file.

use anyhow::Result;

use crate::application::pool::SlotPool;
use crate::application::ports::SlotStore;
use crate::application::services::config_service;

/// Run the check command.
pub fn run(store: &impl SlotStore) -> Result<()> {
    let config = config_service::load_config(store)?;
    let path = store.path()?;

    for (vm_id, raw) in config_service::invalid_behaviors(&config) {
        println!("warning: VM '{vm_id}' has unknown post-build behavior '{raw}', Suspend will be used");
    }

    let pool = SlotPool::from_config(&config)?;
    println!("{} slot(s) OK in {}", pool.len(), path.display());
    Ok(())
}
