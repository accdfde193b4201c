// libs6350-rs/libs6350/src/protocol/responses/iso_error.rs

use crate::Result;
use crate::protocol::Frame;
use crate::types::IsoErrorCode;

/// Fail with `Error::IsoError` when the reader reports an ISO-level
/// failure. An error reply is a 10-byte frame flagged `0x10` whose single
/// payload byte is the code; code zero means success.
pub fn check_iso_error(frame: &Frame) -> Result<()> {
    if !frame.is_error_reply() {
        return Ok(());
    }
    match frame.payload[0] {
        0 => Ok(()),
        code => Err(IsoErrorCode::from(code).into()),
    }
}
