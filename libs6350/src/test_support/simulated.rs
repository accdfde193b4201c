use std::collections::VecDeque;

use log::debug;

use crate::Result;
use crate::constants::{MAX_MASK_BITS, SLOT_COUNT};
use crate::inventory::Mask;
use crate::protocol::{Frame, InventoryRequest};
use crate::transport::Transport;
use crate::types::{Dsfid, TagRecord, Uid};

use super::{inventory_reply, iso_error_reply, tag_block};

/// ISO error the simulated reader sends for requests it cannot parse.
const COMMAND_NOT_SUPPORTED: u8 = 0x02;

/// A reader with virtual tags in its field. Each written inventory request
/// is answered the way ISO15693 tags would: tags whose UID starts with the
/// mask reply in the slot given by the next four UID bits, and a slot with
/// more than one reply is reported as a collision.
#[derive(Debug, Default)]
pub struct SimulatedReader {
    tags: Vec<TagRecord>,
    rx: VecDeque<u8>,
    /// Masks of every inventory request received, in order
    pub requests: Vec<Mask>,
    iso_error: Option<(usize, u8)>,
    silent_from: Option<usize>,
    corrupt_round: Option<usize>,
}

impl SimulatedReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, uid: u64, dsfid: u8) -> Self {
        self.tags.push(TagRecord::new(Uid::from_u64(uid), Dsfid::new(dsfid)));
        self
    }

    pub fn with_tags(mut self, uids: &[u64]) -> Self {
        for &uid in uids {
            self = self.with_tag(uid, 0x00);
        }
        self
    }

    /// Answer the request with index `round` (0-based) with an ISO error.
    pub fn iso_error_on_round(mut self, round: usize, code: u8) -> Self {
        self.iso_error = Some((round, code));
        self
    }

    /// Stop answering from request `round` on.
    pub fn silent_from_round(mut self, round: usize) -> Self {
        self.silent_from = Some(round);
        self
    }

    /// Flip a bit in the complement byte of the reply to request `round`.
    pub fn corrupt_round(mut self, round: usize) -> Self {
        self.corrupt_round = Some(round);
        self
    }

    /// Slot report for one round carrying `mask`.
    fn answer_inventory(&self, mask: &Mask) -> Vec<u8> {
        let mut by_slot: Vec<Vec<&TagRecord>> = vec![Vec::new(); SLOT_COUNT];
        for tag in self.tags.iter().filter(|t| mask.matches(t.uid())) {
            let slot = if mask.bit_len() < MAX_MASK_BITS {
                ((tag.uid().as_u64() >> mask.bit_len()) & 0x0F) as usize
            } else {
                0
            };
            by_slot[slot].push(tag);
        }

        let mut valid = 0u16;
        let mut collisions = 0u16;
        let mut blocks = Vec::new();
        for (slot, replies) in by_slot.iter().enumerate() {
            match replies.as_slice() {
                [] => {}
                [tag] => {
                    valid |= 1 << slot;
                    blocks.push(tag_block(tag.uid().as_u64(), tag.dsfid().as_u8()));
                }
                _ => collisions |= 1 << slot,
            }
        }
        inventory_reply(valid, collisions, &blocks)
    }
}

impl Transport for SimulatedReader {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let round = self.requests.len();
        let request = Frame::decode(data).and_then(|frame| InventoryRequest::decode(&frame));

        let mut reply = match request {
            Ok(request) => {
                self.requests.push(*request.mask());
                match self.iso_error {
                    Some((r, code)) if r == round => iso_error_reply(code),
                    _ => self.answer_inventory(request.mask()),
                }
            }
            Err(e) => {
                debug!("simulated reader rejects request: {}", e);
                iso_error_reply(COMMAND_NOT_SUPPORTED)
            }
        };

        if self.silent_from.is_some_and(|r| round >= r) {
            return Ok(());
        }
        if self.corrupt_round == Some(round) {
            if let Some(last) = reply.last_mut() {
                *last ^= 0x01;
            }
        }
        self.rx.extend(reply);
        Ok(())
    }

    fn read(&mut self, n: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        let take = n.min(self.rx.len());
        Ok(self.rx.drain(..take).collect())
    }
}
