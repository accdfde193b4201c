// libs6350-rs/libs6350/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("no transport configured")]
    TransportMissing,

    #[error("transport timed out: expected {expected} bytes, got {actual}")]
    TransportTimeout { expected: usize, actual: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response command: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("iso error {code:#04x}: {meaning}")]
    IsoError { code: u8, meaning: &'static str },

    #[error("identical (cloned) tags or operational fault: mask reached {mask_bits} bits")]
    ClonedOrFault { mask_bits: u8 },

    #[error("inventory cancelled")]
    Cancelled,

    #[error("inventory exceeded the configured limit of {limit} rounds")]
    RoundLimitExceeded { limit: usize },

    #[error("no inventory session in progress")]
    SessionNotActive,
}

impl Error {
    /// True for errors raised by the link itself rather than by the reader
    /// or the tags in the field.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::TransportMissing | Self::TransportTimeout { .. } | Self::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
