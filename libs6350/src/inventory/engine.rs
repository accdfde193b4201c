// libs6350-rs/libs6350/src/inventory/engine.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace, warn};

use crate::constants::MAX_MASK_BITS;
use crate::inventory::mask::{Mask, MaskStack};
use crate::inventory::report::InventoryReport;
use crate::protocol::{InventoryRequest, codec, decode_inventory_reply};
use crate::transport::Transport;
use crate::types::{SlotFlags, TagRecord};
use crate::utils::DEFAULT_INVENTORY_TIMEOUT_MS;
use crate::{Error, Result};

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Read timeout for each round's reply.
    pub timeout_ms: u64,
    /// Optional cap on the number of rounds one session may send.
    pub max_rounds: Option<usize>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_INVENTORY_TIMEOUT_MS,
            max_rounds: None,
        }
    }
}

/// Where the engine is in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No session started yet.
    Idle,
    /// A request is out and its reply has not been read.
    RoundSent,
    /// A reply was read and is being processed.
    RoundReceived,
    /// Every branch is resolved; the tag list is final.
    Done,
    /// The session aborted with an error.
    Fatal,
}

/// Anti-collision inventory driver. Owns the transport, the pending masks
/// and the tags found so far.
pub struct InventoryEngine {
    transport: Box<dyn Transport>,
    config: InventoryConfig,
    cancel: Option<Arc<AtomicBool>>,
    state: EngineState,
    stack: MaskStack,
    tags: Vec<TagRecord>,
    current: Mask,
    rounds: usize,
}

impl InventoryEngine {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, InventoryConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: InventoryConfig) -> Self {
        Self {
            transport,
            config,
            cancel: None,
            state: EngineState::Idle,
            stack: MaskStack::new(),
            tags: Vec::new(),
            current: Mask::EMPTY,
            rounds: 0,
        }
    }

    /// Share a flag that, once set, stops the session before its next round.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = Some(flag);
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Tags found so far, in discovery order.
    pub fn tags(&self) -> &[TagRecord] {
        &self.tags
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Rounds sent in the current session.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Mask carried by the round currently in flight.
    pub fn current_mask(&self) -> &Mask {
        &self.current
    }

    pub fn pending_masks(&self) -> usize {
        self.stack.len()
    }

    /// Begin a new session: forget earlier results and send the unmasked
    /// first round.
    pub fn start(&mut self) -> Result<()> {
        self.stack.clear();
        self.tags.clear();
        self.rounds = 0;
        self.state = EngineState::Idle;
        debug!("inventory start");
        let sent = self.send_round(Mask::EMPTY);
        self.guard(sent)
    }

    /// Read the reply to the round in flight, record its tags, queue its
    /// collisions and send the next round if any branch is left.
    pub fn step(&mut self) -> Result<EngineState> {
        match self.state {
            EngineState::RoundSent => {}
            EngineState::Done => return Ok(EngineState::Done),
            EngineState::Idle | EngineState::RoundReceived | EngineState::Fatal => {
                return Err(Error::SessionNotActive);
            }
        }
        let round = self.round();
        self.guard(round)
    }

    /// Run a whole session and return what it found.
    pub fn run(&mut self) -> Result<InventoryReport> {
        self.start()?;
        while self.step()? != EngineState::Done {}
        debug!(
            "inventory done: {} tag(s) in {} round(s)",
            self.tags.len(),
            self.rounds
        );
        Ok(self.report())
    }

    /// Snapshot of the results gathered so far.
    pub fn report(&self) -> InventoryReport {
        InventoryReport::new(self.tags.clone(), self.rounds)
    }

    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }

    fn guard<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            warn!("inventory aborted after {} round(s): {}", self.rounds, e);
            self.state = EngineState::Fatal;
        }
        result
    }

    fn round(&mut self) -> Result<EngineState> {
        let frame = codec::read_frame(&mut *self.transport, self.config.timeout_ms)?;
        self.state = EngineState::RoundReceived;
        let response = decode_inventory_reply(&frame)?;

        debug!(
            "round {} (mask {} bits): valid {:#06x}, collisions {:#06x}",
            self.rounds,
            self.current.bit_len(),
            response.valid.bits(),
            response.collisions.bits()
        );

        for (slot, tag) in response.tags {
            debug!("slot {}: tag {} dsfid {}", slot, tag.uid(), tag.dsfid());
            self.tags.push(tag);
        }

        self.push_collisions(response.collisions)?;

        if self.stack.is_empty() {
            self.state = EngineState::Done;
            return Ok(EngineState::Done);
        }

        self.check_cancelled()?;
        if let Some(mask) = self.stack.pop() {
            self.send_round(mask)?;
        }
        Ok(self.state)
    }

    /// Queue one branch per colliding slot. Each bit position is checked in
    /// the low byte (slots 0-7) and then the high byte (slots 8-15).
    fn push_collisions(&mut self, collisions: SlotFlags) -> Result<()> {
        for bit in 0..8u8 {
            for slot in [bit, bit + 8] {
                if !collisions.is_set(slot) {
                    continue;
                }
                let mask = self.current.extend(slot)?;
                if mask.bit_len() >= MAX_MASK_BITS {
                    return Err(Error::ClonedOrFault {
                        mask_bits: mask.bit_len(),
                    });
                }
                trace!(
                    "collision in slot {}: push {}-bit mask {:02x?}",
                    slot,
                    mask.bit_len(),
                    mask.as_bytes()
                );
                self.stack.push(mask);
            }
        }
        Ok(())
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::SeqCst) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    fn send_round(&mut self, mask: Mask) -> Result<()> {
        if let Some(limit) = self.config.max_rounds {
            if self.rounds >= limit {
                return Err(Error::RoundLimitExceeded { limit });
            }
        }
        let request = InventoryRequest::new(mask);
        codec::send_frame(&mut *self.transport, &request.to_frame())?;
        self.current = mask;
        self.rounds += 1;
        self.state = EngineState::RoundSent;
        debug!(
            "round {} sent: mask {} bits, {} branch(es) pending",
            self.rounds,
            mask.bit_len(),
            self.stack.len()
        );
        Ok(())
    }
}
