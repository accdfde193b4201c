// libs6350-rs/libs6350/src/protocol/frame.rs

use crate::constants::{
    ERROR_FLAGS, ERROR_PAYLOAD_LEN, FRAME_HEADER_LEN, FRAME_MAX_LEN, FRAME_MIN_LEN, HOST_FLAGS,
    READER_ADDRESS, SOF,
};
use crate::protocol::checksum::{complement, xor_checksum};
use crate::{Error, Result};

/// S6350 frame helper. Provides encode/decode of the wire frame.
/// Format: [SOF] [Len(2, LE)] [Addr(2)] [Flags] [Cmd] [Payload(n)] [Chk] [!Chk]
/// Len counts every byte of the frame. Chk is the XOR of all bytes before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub flags: u8,
    pub command: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Host request frame (flags cleared).
    pub fn new(command: u8, payload: Vec<u8>) -> Self {
        Self::with_flags(HOST_FLAGS, command, payload)
    }

    pub fn with_flags(flags: u8, command: u8, payload: Vec<u8>) -> Self {
        Self {
            flags,
            command,
            payload,
        }
    }

    /// Total number of bytes this frame occupies on the wire.
    pub fn wire_len(&self) -> usize {
        FRAME_MIN_LEN + self.payload.len()
    }

    /// Whether the reader flagged this reply as an ISO error report.
    pub fn is_error_reply(&self) -> bool {
        self.flags == ERROR_FLAGS && self.payload.len() == ERROR_PAYLOAD_LEN
    }

    /// Encode into the full wire representation.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let total = self.wire_len();
        if total > FRAME_MAX_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_MAX_LEN,
                actual: total,
            });
        }

        let mut out = Vec::with_capacity(total);
        out.push(SOF);
        out.extend_from_slice(&[0, 0]); // length, filled below
        out.extend_from_slice(&READER_ADDRESS.to_le_bytes());
        out.push(self.flags);
        out.push(self.command);
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&[0, 0]); // checksum pair, filled below

        let len = (out.len() as u16).to_le_bytes();
        out[1] = len[0];
        out[2] = len[1];

        let chk_idx = out.len() - 2;
        let chk = xor_checksum(&out[..chk_idx]);
        out[chk_idx] = chk;
        out[chk_idx + 1] = complement(chk);
        Ok(out)
    }

    /// Decode and validate a complete frame held in memory.
    pub fn decode(frame: &[u8]) -> Result<Frame> {
        if frame.len() < FRAME_MIN_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_MIN_LEN,
                actual: frame.len(),
            });
        }

        if frame[0] != SOF {
            return Err(Error::FrameFormat(format!(
                "invalid start of frame {:#04x}",
                frame[0]
            )));
        }

        let declared = u16::from_le_bytes([frame[1], frame[2]]) as usize;
        if declared != frame.len() {
            return Err(Error::InvalidLength {
                expected: declared,
                actual: frame.len(),
            });
        }

        let chk_idx = frame.len() - 2;
        let expected = xor_checksum(&frame[..chk_idx]);
        if frame[chk_idx] != expected {
            return Err(Error::ChecksumMismatch {
                expected,
                actual: frame[chk_idx],
            });
        }
        if frame[chk_idx + 1] != complement(expected) {
            return Err(Error::ChecksumMismatch {
                expected: complement(expected),
                actual: frame[chk_idx + 1],
            });
        }

        Ok(Frame {
            flags: frame[5],
            command: frame[6],
            payload: frame[FRAME_HEADER_LEN..chk_idx].to_vec(),
        })
    }
}

/// Encode a host command frame for `command` carrying `payload`.
pub fn encode(command: u8, payload: &[u8]) -> Result<Vec<u8>> {
    Frame::new(command, payload.to_vec()).encode()
}
