//! Application layer — use-case orchestration over domain types and ports.

pub mod pool;
pub mod ports;
pub mod services;

pub use pool::{SlotPool, SlotStatus};
