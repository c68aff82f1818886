//! `deskcloud post-build` — show the command a slot would receive after a build.

use anyhow::Result;
use clap::Args;
use deskcloud_common::parse_vm_state;
use serde::Serialize;

use crate::application::ports::SlotStore;
use crate::application::services::config_service;

/// Arguments for the post-build command.
#[derive(Args)]
pub struct PostBuildArgs {
    /// VM identifier
    pub vm_id: String,

    /// Power state observed before the build (stopped, paused, running, suspended)
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Serialize)]
struct Resolution {
    vm_id: String,
    post_build_behavior: &'static str,
    prev_vm_state: &'static str,
    command: Option<&'static str>,
}

/// Run the post-build command.
pub fn run(store: &impl SlotStore, args: &PostBuildArgs, json: bool) -> Result<()> {
    let pool = config_service::load_pool(store)?;
    let state = args.state.as_deref().map(|raw| (raw, parse_vm_state(raw)));

    let resolution = pool.with_slot(&args.vm_id, |slot| {
        match state {
            Some((_, Some(state))) => slot.set_prev_vm_state(state),
            Some((raw, None)) => {
                tracing::warn!(vm_id = slot.vm_id(), state = raw, "unknown VM state, keeping the previous one");
            }
            None => {}
        }
        Resolution {
            vm_id: slot.vm_id().to_string(),
            post_build_behavior: slot.post_build_behavior_name(),
            prev_vm_state: slot.prev_vm_state().as_str(),
            command: slot.post_build_command().map(|c| c.as_str()),
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", resolution.command.unwrap_or("none"));
    }
    Ok(())
}
