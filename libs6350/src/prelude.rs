// libs6350-rs/libs6350/src/prelude.rs

pub use crate::inventory::{
    EngineState, InventoryConfig, InventoryEngine, InventoryEngineBuilder, InventoryReport, Mask,
    MaskStack, run_inventory,
};
pub use crate::protocol::{Frame, InventoryRequest, InventoryResponse};
pub use crate::transport::{IoTransport, MockTransport, ReadTimeout, Transport};
pub use crate::{Dsfid, Error, IsoErrorCode, Result, SlotFlags, TagRecord, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{
    DEFAULT_INVENTORY_TIMEOUT_MS, DEFAULT_QUERY_TIMEOUT_MS, bytes_to_hex, bytes_to_hex_spaced, ms,
};
