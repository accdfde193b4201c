// libs6350-rs/libs6350/src/protocol/codec.rs

use log::trace;

use crate::constants::FRAME_MIN_LEN;
use crate::transport::Transport;
use crate::{Error, Result, utils};

use super::Frame;

/// Encode `frame` and hand it to the transport.
pub fn send_frame(transport: &mut dyn Transport, frame: &Frame) -> Result<()> {
    let bytes = frame.encode()?;
    trace!("tx {}", utils::bytes_to_hex_spaced(&bytes));
    transport.write(&bytes)
}

/// Read one reply frame from the transport and validate it.
///
/// The reader is polled twice: first for the start byte and the length low
/// byte, then for the remainder the length announces. Either read coming
/// back short is a `TransportTimeout`.
pub fn read_frame(transport: &mut dyn Transport, timeout_ms: u64) -> Result<Frame> {
    let head = transport.read(2, timeout_ms)?;
    if head.len() < 2 {
        return Err(Error::TransportTimeout {
            expected: 2,
            actual: head.len(),
        });
    }

    let total = head[1] as usize;
    if total < FRAME_MIN_LEN {
        return Err(Error::InvalidLength {
            expected: FRAME_MIN_LEN,
            actual: total,
        });
    }

    let rest = transport.read(total - 2, timeout_ms)?;
    if rest.len() < total - 2 {
        return Err(Error::TransportTimeout {
            expected: total - 2,
            actual: rest.len(),
        });
    }

    let mut bytes = head;
    bytes.extend_from_slice(&rest);
    trace!("rx {}", utils::bytes_to_hex_spaced(&bytes));
    Frame::decode(&bytes)
}

/// Send a request and wait for its reply.
pub fn transact(transport: &mut dyn Transport, request: &Frame, timeout_ms: u64) -> Result<Frame> {
    send_frame(transport, request)?;
    read_frame(transport, timeout_ms)
}
