//! The set of configured slots and their checkout discipline.
//!
//! Each slot sits behind its own mutex. Checkout is a compare-and-set on the
//! slot's provisioned flag under that lock, so two callers can never be
//! handed the same VM. Locks are never held across an `.await`.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use deskcloud_common::{CloudConfig, VmState};
use serde::Serialize;

use crate::domain::{ConfigError, SlotError, VmSlot};

/// Point-in-time view of a slot, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStatus {
    pub vm_id: String,
    pub labels: String,
    pub remote_fs: String,
    pub post_build_behavior: &'static str,
    pub launcher: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub checked_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    pub prev_vm_state: VmState,
}

impl From<&VmSlot> for SlotStatus {
    fn from(slot: &VmSlot) -> Self {
        Self {
            vm_id: slot.vm_id().to_string(),
            labels: slot.labels().to_string(),
            remote_fs: slot.remote_fs().to_string(),
            post_build_behavior: slot.post_build_behavior_name(),
            launcher: slot.launcher().kind(),
            host: slot.launcher_ip().map(String::from),
            checked_out: slot.is_provisioned(),
            agent_name: slot.agent_name().map(String::from),
            prev_vm_state: slot.prev_vm_state(),
        }
    }
}

#[derive(Debug)]
pub struct SlotPool {
    slots: Vec<Mutex<VmSlot>>,
}

fn lock(slot: &Mutex<VmSlot>) -> MutexGuard<'_, VmSlot> {
    // Slot state stays usable after a holder panicked.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SlotPool {
    /// Build a pool, rejecting empty and duplicate VM ids.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first invalid slot found.
    pub fn new(slots: Vec<VmSlot>) -> Result<Self, ConfigError> {
        {
            let mut seen = HashSet::new();
            for (index, slot) in slots.iter().enumerate() {
                if slot.vm_id().trim().is_empty() {
                    return Err(ConfigError::EmptyVmId { index });
                }
                if !seen.insert(slot.vm_id()) {
                    return Err(ConfigError::DuplicateVmId(slot.vm_id().to_string()));
                }
            }
        }
        Ok(Self {
            slots: slots.into_iter().map(Mutex::new).collect(),
        })
    }

    /// # Errors
    ///
    /// See [`SlotPool::new`].
    pub fn from_config(config: &CloudConfig) -> Result<Self, ConfigError> {
        Self::new(
            config
                .slots
                .iter()
                .cloned()
                .map(VmSlot::from_definition)
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check out the first free slot matching `label`.
    ///
    /// Returns the VM id of the slot now marked provisioned, or `None` if
    /// every matching slot is busy.
    #[must_use]
    pub fn checkout(&self, label: Option<&str>) -> Option<String> {
        self.slots.iter().find_map(|slot| {
            let mut slot = lock(slot);
            if slot.is_provisioned() || !slot.matches_label(label) {
                return None;
            }
            slot.mark_provisioned();
            Some(slot.vm_id().to_string())
        })
    }

    /// Run `f` against the locked slot for `vm_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::UnknownSlot`] if no slot has that id.
    pub fn with_slot<R>(&self, vm_id: &str, f: impl FnOnce(&mut VmSlot) -> R) -> Result<R, SlotError> {
        for slot in &self.slots {
            let mut guard = lock(slot);
            if guard.vm_id() == vm_id {
                return Ok(f(&mut *guard));
            }
        }
        Err(SlotError::UnknownSlot(vm_id.to_string()))
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<SlotStatus> {
        self.slots
            .iter()
            .map(|slot| SlotStatus::from(&*lock(slot)))
            .collect()
    }

    /// Persistable form of every slot, in pool order.
    #[must_use]
    pub fn to_config(&self) -> CloudConfig {
        CloudConfig {
            slots: self.slots.iter().map(|s| lock(s).to_definition()).collect(),
        }
    }
}
