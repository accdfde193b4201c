#[path = "../common/mod.rs"]
mod common;

use libs6350::Error;
use libs6350::inventory::Mask;
use libs6350::protocol::{Frame, InventoryRequest, codec, encode};
use libs6350::transport::MockTransport;

#[test]
fn unmasked_request_matches_wire_capture() {
    let bytes = InventoryRequest::new(Mask::EMPTY).to_frame().encode().unwrap();
    assert_eq!(bytes, common::fixtures::unmasked_inventory_request());
}

#[test]
fn hand_written_reply_matches_encoder() {
    assert_eq!(
        common::fixtures::single_tag_reply(),
        common::fixtures::single_tag_reply_encoded()
    );
}

#[test]
fn decode_over_transport_recovers_command_and_payload() {
    let payload: Vec<u8> = (0u8..40).collect();
    let mut mock = MockTransport::new();
    mock.push_response(encode(0x60, &payload).unwrap());

    let frame = codec::read_frame(&mut mock, 5000).unwrap();
    assert_eq!(frame.command, 0x60);
    assert_eq!(frame.flags, 0x00);
    assert_eq!(frame.payload, payload);
    assert_eq!(mock.pending_rx(), 0);
}

#[test]
fn back_to_back_frames_are_read_one_at_a_time() {
    let mut mock = MockTransport::new();
    mock.push_response(encode(0x60, &[0x01]).unwrap());
    mock.push_response(encode(0x61, &[0x02, 0x03]).unwrap());

    let first = codec::read_frame(&mut mock, 10).unwrap();
    let second = codec::read_frame(&mut mock, 10).unwrap();
    assert_eq!(first, Frame::new(0x60, vec![0x01]));
    assert_eq!(second, Frame::new(0x61, vec![0x02, 0x03]));
}

#[test]
fn corrupted_final_byte_is_checksum_mismatch() {
    let mut reply = common::fixtures::single_tag_reply();
    let last = reply.len() - 1;
    reply[last] ^= 0x01;

    let mut mock = MockTransport::new();
    mock.push_response(reply);
    match codec::read_frame(&mut mock, 10) {
        Err(Error::ChecksumMismatch { expected, actual }) => {
            assert_eq!(expected, 0x80);
            assert_eq!(actual, 0x81);
        }
        other => panic!("expected checksum mismatch, got: {:?}", other),
    }
}

#[test]
fn oversized_payload_is_rejected() {
    let payload = vec![0u8; u16::MAX as usize];
    assert!(matches!(
        encode(0x60, &payload),
        Err(Error::InvalidLength { .. })
    ));
}
