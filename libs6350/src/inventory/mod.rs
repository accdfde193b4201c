// libs6350-rs/libs6350/src/inventory/mod.rs
//! ISO15693 16-slot anti-collision inventory.
//!
//! A session starts with an unmasked round. Every slot that reports a
//! collision spawns a longer mask, pushed on a stack; the engine pops masks
//! and re-issues rounds until the stack is empty.

pub mod builder;
pub mod engine;
pub mod mask;
pub mod report;

pub use builder::InventoryEngineBuilder;
pub use engine::{EngineState, InventoryConfig, InventoryEngine};
pub use mask::{Mask, MaskStack};
pub use report::InventoryReport;

use crate::Result;
use crate::transport::Transport;

/// Run one complete inventory session with default settings.
pub fn run_inventory(transport: Box<dyn Transport>) -> Result<InventoryReport> {
    InventoryEngine::new(transport).run()
}
