// libs6350-rs/libs6350/src/protocol/commands/mod.rs

pub mod inventory;

pub use inventory::InventoryRequest;
