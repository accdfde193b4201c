// libs6350-rs/libs6350/src/protocol/responses/mod.rs

pub mod inventory;
pub mod iso_error;

pub use inventory::InventoryResponse;
pub use iso_error::check_iso_error;

use crate::Result;
use crate::constants::CMD_ISO_PASSTHROUGH;
use crate::protocol::Frame;
use crate::protocol::parser::expect_command;

/// Interpret a validated reply frame as the answer to an inventory round.
/// ISO error replies are turned into `Error::IsoError` before any slot
/// data is looked at.
pub fn decode_inventory_reply(frame: &Frame) -> Result<InventoryResponse> {
    expect_command(frame.command, CMD_ISO_PASSTHROUGH)?;
    check_iso_error(frame)?;
    InventoryResponse::decode(&frame.payload)
}
