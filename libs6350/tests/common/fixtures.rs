// fixtures.rs: shared test payloads and frames

use libs6350::protocol::Frame;
use libs6350::types::Uid;

/// UID 01 02 03 04 05 06 07 08 (most significant byte first).
pub fn sample_uid() -> Uid {
    Uid::from_u64(0x0102030405060708)
}

/// Inventory reply with one tag in slot 0, DSFID 0, written out by hand.
pub fn single_tag_reply() -> Vec<u8> {
    hex::decode(concat!(
        "01", "1700", "0000", "00", "60", // SOF, length 23, address, flags, command
        "0100", "0000",                   // valid slot 0, no collisions
        "00", "00", "0807060504030201",   // reserved, DSFID, UID reversed
        "7f80",                           // checksum pair
    ))
    .unwrap()
}

/// The same reply built through the encoder.
pub fn single_tag_reply_encoded() -> Vec<u8> {
    let mut payload = vec![0x01, 0x00, 0x00, 0x00, 0x00, 0x00];
    payload.extend_from_slice(&sample_uid().to_wire());
    Frame::new(0x60, payload).encode().unwrap()
}

/// Unmasked 16-slot inventory request as the reader expects it.
pub fn unmasked_inventory_request() -> Vec<u8> {
    hex::decode("010d0000000060110701007b84").unwrap()
}
