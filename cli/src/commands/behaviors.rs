//! `deskcloud behaviors` — list the selectable post-build behaviors.

use anyhow::Result;

use crate::application::services::registry::register_descriptors;
use crate::infra::registry::ListingRegistry;

/// Run the behaviors command.
pub fn run(json: bool) -> Result<()> {
    let mut registry = ListingRegistry::default();
    register_descriptors(&mut registry);

    if json {
        println!("{}", serde_json::to_string_pretty(registry.entries())?);
        return Ok(());
    }
    for entry in registry.entries() {
        println!("{}", entry.display_name);
        for item in &entry.post_build_behaviors {
            println!("  {:<16} {}", item.value, item.label);
        }
    }
    Ok(())
}
