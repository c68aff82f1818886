//! Slot lifecycle: check out and prepare a VM for a build, release it after.
//!
//! Imports only from `crate::domain`, `crate::application` and
//! `deskcloud_common`.

use anyhow::{Context, Result};
use deskcloud_common::{PostBuildCommand, VmState, parse_vm_state};

use crate::application::pool::SlotPool;
use crate::application::ports::VmControl;
use crate::domain::VmSlot;

/// Check out a free slot matching `label` and bring its VM up for `agent_name`.
///
/// Records the VM's power state before the build, starts it unless it is
/// already running, and points the launcher at its current address.
///
/// Returns `Ok(None)` when no matching slot is free.
///
/// # Errors
///
/// Returns an error if the hypervisor control fails. The slot is released
/// again before returning.
pub async fn provision(
    pool: &SlotPool,
    control: &impl VmControl,
    label: Option<&str>,
    agent_name: &str,
) -> Result<Option<String>> {
    let Some(vm_id) = pool.checkout(label) else {
        tracing::debug!(label = ?label, "no free slot");
        return Ok(None);
    };

    if let Err(e) = prepare(pool, control, &vm_id, agent_name).await {
        pool.with_slot(&vm_id, VmSlot::on_agent_released)?;
        return Err(e);
    }

    tracing::info!(vm_id = %vm_id, agent = agent_name, "slot provisioned");
    Ok(Some(vm_id))
}

async fn prepare(
    pool: &SlotPool,
    control: &impl VmControl,
    vm_id: &str,
    agent_name: &str,
) -> Result<()> {
    let raw = control
        .query_state(vm_id)
        .await
        .with_context(|| format!("querying state of VM '{vm_id}'"))?;
    let state = parse_vm_state(&raw);
    match state {
        Some(state) => pool.with_slot(vm_id, |slot| slot.set_prev_vm_state(state))?,
        None => tracing::warn!(vm_id, state = %raw, "unknown VM state, keeping the previous one"),
    }

    if state != Some(VmState::Running) {
        control
            .start(vm_id)
            .await
            .with_context(|| format!("starting VM '{vm_id}'"))?;
    }

    let ip = control
        .resolve_ip(vm_id)
        .await
        .with_context(|| format!("resolving address of VM '{vm_id}'"))?;

    pool.with_slot(vm_id, |slot| {
        if let Err(e) = slot.set_launcher_ip(&ip) {
            tracing::warn!(error = %e, "launcher address not updated");
        }
        slot.set_agent_name(agent_name);
    })?;
    Ok(())
}

/// The agent bound to `vm_id` disconnected: apply the slot's post-build
/// command, then free the slot.
///
/// The slot stays checked out while the command is in flight, so no other
/// job can be handed the VM before it has been stopped or suspended.
///
/// Returns the command that was applied. A slot that was not checked out is
/// left alone and no command is sent.
///
/// # Errors
///
/// Returns an error if the slot is unknown or the hypervisor control fails.
/// The slot is free again in either case.
pub async fn release(
    pool: &SlotPool,
    control: &impl VmControl,
    vm_id: &str,
) -> Result<Option<PostBuildCommand>> {
    let (was_checked_out, command) =
        pool.with_slot(vm_id, |slot| (slot.is_provisioned(), slot.post_build_command()))?;

    if !was_checked_out {
        pool.with_slot(vm_id, VmSlot::on_agent_released)?;
        tracing::debug!(vm_id, "slot already released");
        return Ok(None);
    }

    let applied = match command {
        Some(command) => control
            .apply(vm_id, command)
            .await
            .with_context(|| format!("sending '{command}' to VM '{vm_id}'")),
        None => Ok(()),
    };
    pool.with_slot(vm_id, VmSlot::on_agent_released)?;
    applied?;

    match command {
        Some(command) => tracing::info!(vm_id, command = %command, "slot released"),
        None => tracing::info!(vm_id, "slot released, VM left running"),
    }
    Ok(command)
}
