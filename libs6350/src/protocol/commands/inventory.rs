// libs6350-rs/libs6350/src/protocol/commands/inventory.rs

use crate::constants::{CMD_ISO_PASSTHROUGH, INVENTORY_CONFIG, INVENTORY_SLOT_FLAGS, ISO_CMD_INVENTORY};
use crate::inventory::Mask;
use crate::protocol::Frame;
use crate::protocol::parser::{byte_at, expect_command};
use crate::{Error, Result};

/// ISO15693 16-slot inventory, wrapped in the reader's ISO pass-through
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryRequest {
    mask: Mask,
}

impl InventoryRequest {
    pub fn new(mask: Mask) -> Self {
        Self { mask }
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// `[config][slot flags][inventory][mask bit length][mask bytes...]`
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.mask.byte_len());
        out.push(INVENTORY_CONFIG);
        out.push(INVENTORY_SLOT_FLAGS);
        out.push(ISO_CMD_INVENTORY);
        out.push(self.mask.bit_len());
        out.extend_from_slice(self.mask.as_bytes());
        out
    }

    pub fn to_frame(&self) -> Frame {
        Frame::new(CMD_ISO_PASSTHROUGH, self.encode())
    }

    /// Parse a request frame back into its mask. Used by the simulated
    /// reader in tests.
    pub fn decode(frame: &Frame) -> Result<Self> {
        expect_command(frame.command, CMD_ISO_PASSTHROUGH)?;
        let iso_cmd = byte_at(&frame.payload, 2)?;
        if iso_cmd != ISO_CMD_INVENTORY {
            return Err(Error::UnexpectedResponse {
                expected: ISO_CMD_INVENTORY,
                actual: iso_cmd,
            });
        }
        let bit_len = byte_at(&frame.payload, 3)?;
        let mask = Mask::new(bit_len, &frame.payload[4..])?;
        Ok(Self { mask })
    }
}
