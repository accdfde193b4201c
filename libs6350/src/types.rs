// libs6350-rs/libs6350/src/types.rs

use crate::Error;
use crate::constants::{SLOT_COUNT, UID_LEN};
use derive_more::{Display, From};
use std::convert::TryFrom;

/// UID - Newtype Pattern (8 bytes, most significant byte first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a UID from the reader's wire order, which stores the least
    /// significant byte first.
    pub fn from_wire(bytes: &[u8]) -> Result<Self, Error> {
        let mut uid = Self::try_from(bytes)?;
        uid.0.reverse();
        Ok(uid)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(value.to_be_bytes())
    }

    /// Bytes in wire order (least significant first).
    pub fn to_wire(&self) -> [u8; UID_LEN] {
        let mut out = self.0;
        out.reverse();
        out
    }

    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    pub fn as_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// `0x` followed by 16 hex digits, most significant byte first.
    pub fn to_hex(&self) -> String {
        format!("0x{}", crate::utils::bytes_to_hex(self.as_bytes()))
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LEN {
            return Err(Error::InvalidLength {
                expected: UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Data Storage Format Identifier
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[display(fmt = "0x{:02x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dsfid(u8);

impl Dsfid {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// A tag discovered during an inventory session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagRecord {
    uid: Uid,
    dsfid: Dsfid,
}

impl TagRecord {
    pub fn new(uid: Uid, dsfid: Dsfid) -> Self {
        Self { uid, dsfid }
    }

    pub fn uid(&self) -> Uid {
        self.uid
    }

    pub fn dsfid(&self) -> Dsfid {
        self.dsfid
    }
}

/// One flag bit per time slot, as reported in an inventory reply.
/// Bit `n` of the little-endian value is slot `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, From)]
pub struct SlotFlags(u16);

impl SlotFlags {
    pub const NONE: Self = Self(0);

    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn is_set(&self, slot: u8) -> bool {
        (slot as usize) < SLOT_COUNT && self.0 & (1 << slot) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Set slots in ascending order.
    pub fn iter_set(&self) -> impl Iterator<Item = u8> + '_ {
        (0..SLOT_COUNT as u8).filter(move |&slot| self.is_set(slot))
    }

    /// Slots that are set in both `self` and `other`.
    pub fn overlap(&self, other: SlotFlags) -> SlotFlags {
        Self(self.0 & other.0)
    }
}

/// ISO15693 error codes the reader forwards in an error reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoErrorCode {
    TransponderNotFound,
    CommandNotSupported,
    InvalidFlags,
    Unknown(u8),
}

impl IsoErrorCode {
    pub fn code(&self) -> u8 {
        match self {
            Self::TransponderNotFound => 0x01,
            Self::CommandNotSupported => 0x02,
            Self::InvalidFlags => 0x04,
            Self::Unknown(code) => *code,
        }
    }

    pub fn meaning(&self) -> &'static str {
        match self {
            Self::TransponderNotFound => "Transponder not found",
            Self::CommandNotSupported => "Command not supported",
            Self::InvalidFlags => "Invalid flags",
            Self::Unknown(_) => "Unknown error code",
        }
    }
}

impl From<u8> for IsoErrorCode {
    fn from(code: u8) -> Self {
        match code {
            0x01 => Self::TransponderNotFound,
            0x02 => Self::CommandNotSupported,
            0x04 => Self::InvalidFlags,
            other => Self::Unknown(other),
        }
    }
}

impl From<IsoErrorCode> for Error {
    fn from(code: IsoErrorCode) -> Self {
        Error::IsoError {
            code: code.code(),
            meaning: code.meaning(),
        }
    }
}
