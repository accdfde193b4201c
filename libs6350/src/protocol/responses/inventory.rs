// libs6350-rs/libs6350/src/protocol/responses/inventory.rs

use log::warn;

use crate::Result;
use crate::constants::{INVENTORY_FLAGS_LEN, TAG_BLOCK_LEN, UID_LEN};
use crate::protocol::parser::{ensure_len, pair_at, slice_at};
use crate::types::{Dsfid, SlotFlags, TagRecord, Uid};

/// Offsets inside a 10-byte tag block
const BLOCK_DSFID: usize = 1;
const BLOCK_UID: usize = 2;

/// Slot report for one inventory round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryResponse {
    pub valid: SlotFlags,
    pub collisions: SlotFlags,
    /// Tags that answered alone in their slot, in ascending slot order.
    pub tags: Vec<(u8, TagRecord)>,
}

impl InventoryResponse {
    /// Parse `[validLo][validHi][collLo][collHi][tag block]*` where each
    /// block is `[reserved][DSFID][UID, least significant byte first]`.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        ensure_len(payload, INVENTORY_FLAGS_LEN)?;
        let valid = SlotFlags::from_le_bytes(pair_at(payload, 0)?);
        let collisions = SlotFlags::from_le_bytes(pair_at(payload, 2)?);

        let both = valid.overlap(collisions);
        if !both.is_empty() {
            warn!(
                "slots {:?} flagged both valid and colliding",
                both.iter_set().collect::<Vec<_>>()
            );
        }

        ensure_len(payload, INVENTORY_FLAGS_LEN + valid.count() * TAG_BLOCK_LEN)?;

        let mut tags = Vec::with_capacity(valid.count());
        for (i, slot) in valid.iter_set().enumerate() {
            let block = slice_at(payload, INVENTORY_FLAGS_LEN + i * TAG_BLOCK_LEN, TAG_BLOCK_LEN)?;
            let uid = Uid::from_wire(&block[BLOCK_UID..BLOCK_UID + UID_LEN])?;
            let dsfid = Dsfid::new(block[BLOCK_DSFID]);
            tags.push((slot, TagRecord::new(uid, dsfid)));
        }

        Ok(Self {
            valid,
            collisions,
            tags,
        })
    }
}
