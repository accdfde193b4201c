// libs6350-rs/libs6350/src/constants.rs
//! Common protocol constants used across the crate

/// Start-of-frame marker for every S6350 frame
pub const SOF: u8 = 0x01;

/// Header bytes before the payload: SOF, length (2), address (2), flags, command
pub const FRAME_HEADER_LEN: usize = 7;

/// Trailing checksum and complement-checksum bytes
pub const FRAME_CHECKSUM_LEN: usize = 2;

/// Smallest well-formed frame: header plus checksum pair, no payload
pub const FRAME_MIN_LEN: usize = FRAME_HEADER_LEN + FRAME_CHECKSUM_LEN;

/// Largest frame the 16-bit length field can describe
pub const FRAME_MAX_LEN: usize = u16::MAX as usize;

/// Reader address, always zero on a point-to-point serial link
pub const READER_ADDRESS: u16 = 0x0000;

/// Command flags used by the host for requests
pub const HOST_FLAGS: u8 = 0x00;

/// Flags value the reader sets on an ISO error reply
pub const ERROR_FLAGS: u8 = 0x10;

/// Payload length of an ISO error reply (just the error code)
pub const ERROR_PAYLOAD_LEN: usize = 1;

/// Reader command id: ISO15693 pass-through
pub const CMD_ISO_PASSTHROUGH: u8 = 0x60;

/// ISO reader configuration byte 0 for inventory
pub const INVENTORY_CONFIG: u8 = 0x11;

/// Tag request flags selecting 16 time slots
pub const INVENTORY_SLOT_FLAGS: u8 = 0x07;

/// ISO15693 inventory command code
pub const ISO_CMD_INVENTORY: u8 = 0x01;

/// Number of time slots in a 16-slot inventory round
pub const SLOT_COUNT: usize = 16;

/// Valid-data flags (2) plus collision flags (2)
pub const INVENTORY_FLAGS_LEN: usize = 4;

/// Tag block: reserved byte, DSFID, 8-byte UID
pub const TAG_BLOCK_LEN: usize = 10;

/// UID length in bytes
pub const UID_LEN: usize = 8;

/// Bits the mask grows by per resolved collision (width of the slot counter)
pub const MASK_STEP_BITS: u8 = 4;

/// A mask this long that still collides means cloned tags or a fault
pub const MAX_MASK_BITS: u8 = 64;

/// Maximum mask length in bytes
pub const MAX_MASK_BYTES: usize = (MAX_MASK_BITS / 8) as usize;
