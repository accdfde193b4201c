// libs6350-rs/libs6350/src/inventory/mask.rs

use crate::constants::{MASK_STEP_BITS, MAX_MASK_BITS, MAX_MASK_BYTES, SLOT_COUNT};
use crate::types::Uid;
use crate::{Error, Result};

/// Anti-collision mask: the low `bit_len` bits of a UID, packed least
/// significant nibble first. Only tags whose UID starts with these bits
/// answer an inventory round carrying the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mask {
    bit_len: u8,
    bytes: [u8; MAX_MASK_BYTES],
}

impl Mask {
    /// The empty mask every session starts with.
    pub const EMPTY: Self = Self {
        bit_len: 0,
        bytes: [0; MAX_MASK_BYTES],
    };

    /// Build a mask from its bit length and `ceil(bit_len / 8)` bytes.
    pub fn new(bit_len: u8, bytes: &[u8]) -> Result<Self> {
        if bit_len > MAX_MASK_BITS || bit_len % MASK_STEP_BITS != 0 {
            return Err(Error::FrameFormat(format!(
                "mask length {} is not a multiple of {} up to {}",
                bit_len, MASK_STEP_BITS, MAX_MASK_BITS
            )));
        }
        let expected = byte_len_for(bit_len);
        if bytes.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        let mut out = Self {
            bit_len,
            bytes: [0; MAX_MASK_BYTES],
        };
        out.bytes[..expected].copy_from_slice(bytes);
        Ok(out)
    }

    pub fn bit_len(&self) -> u8 {
        self.bit_len
    }

    pub fn byte_len(&self) -> usize {
        byte_len_for(self.bit_len)
    }

    /// Mask bytes as sent on the wire, least significant first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.byte_len()]
    }

    /// True once the mask covers the whole UID.
    pub fn is_full(&self) -> bool {
        self.bit_len >= MAX_MASK_BITS
    }

    /// Numeric value of the mask bits.
    pub fn value(&self) -> u64 {
        u64::from_le_bytes(self.bytes) & low_bits(self.bit_len)
    }

    /// Whether a tag with this UID answers a round carrying the mask.
    pub fn matches(&self, uid: Uid) -> bool {
        uid.as_u64() & low_bits(self.bit_len) == self.value()
    }

    /// Mask for the branch of a collision seen in `slot`: the slot number
    /// becomes the next nibble. A pending low nibble gets the slot in its
    /// high half, otherwise a new byte starts with the slot in its low half.
    pub fn extend(&self, slot: u8) -> Result<Mask> {
        if self.is_full() {
            return Err(Error::ClonedOrFault {
                mask_bits: self.bit_len,
            });
        }
        debug_assert!((slot as usize) < SLOT_COUNT);
        let slot = slot & 0x0F;

        let full = (self.bit_len / 8) as usize;
        let mut bytes = [0u8; MAX_MASK_BYTES];
        bytes[..full].copy_from_slice(&self.bytes[..full]);
        bytes[full] = if self.bit_len % 8 != 0 {
            self.bytes[full] | (slot << 4)
        } else {
            slot
        };

        Ok(Mask {
            bit_len: self.bit_len + MASK_STEP_BITS,
            bytes,
        })
    }
}

fn byte_len_for(bit_len: u8) -> usize {
    (bit_len as usize).div_ceil(8)
}

fn low_bits(bit_len: u8) -> u64 {
    if bit_len >= 64 {
        u64::MAX
    } else {
        (1u64 << bit_len) - 1
    }
}

/// Pending collision branches. Last in, first out, so the walk goes depth
/// first: the most recently found collision is resolved before older ones.
#[derive(Debug, Default)]
pub struct MaskStack {
    entries: Vec<Mask>,
}

impl MaskStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mask: Mask) {
        self.entries.push(mask);
    }

    pub fn pop(&mut self) -> Option<Mask> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&Mask> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
