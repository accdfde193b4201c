#[path = "../common/mod.rs"]
mod common;

use libs6350::Error;
use libs6350::protocol::{Frame, decode_inventory_reply};

#[test]
fn single_tag_reply_decodes() {
    let frame = Frame::decode(&common::fixtures::single_tag_reply()).unwrap();
    let resp = decode_inventory_reply(&frame).unwrap();
    assert_eq!(resp.tags.len(), 1);
    assert_eq!(resp.tags[0].1.uid(), common::fixtures::sample_uid());
    assert_eq!(resp.tags[0].1.dsfid().as_u8(), 0x00);
}

#[test]
fn iso_error_reply_surfaces_code_and_meaning() {
    let frame = Frame::decode(&common::iso_error_reply(0x04)).unwrap();
    assert_eq!(frame.wire_len(), 10);
    match decode_inventory_reply(&frame) {
        Err(Error::IsoError { code, meaning }) => {
            assert_eq!(code, 0x04);
            assert_eq!(meaning, "Invalid flags");
        }
        other => panic!("expected IsoError, got: {:?}", other),
    }
}

#[test]
fn unknown_iso_error_code() {
    let frame = Frame::decode(&common::iso_error_reply(0x0A)).unwrap();
    match decode_inventory_reply(&frame) {
        Err(Error::IsoError { code, meaning }) => {
            assert_eq!(code, 0x0A);
            assert_eq!(meaning, "Unknown error code");
        }
        other => panic!("expected IsoError, got: {:?}", other),
    }
}

#[test]
fn sixteen_tags_fill_every_slot() {
    let blocks: Vec<Vec<u8>> = (0..16u64).map(|i| common::tag_block(0x1000 + i, i as u8)).collect();
    let frame = Frame::decode(&common::inventory_reply(0xFFFF, 0x0000, &blocks)).unwrap();
    let resp = decode_inventory_reply(&frame).unwrap();
    assert_eq!(resp.tags.len(), 16);
    for (i, (slot, tag)) in resp.tags.iter().enumerate() {
        assert_eq!(*slot as usize, i);
        assert_eq!(tag.uid().as_u64(), 0x1000 + i as u64);
        assert_eq!(tag.dsfid().as_u8() as usize, i);
    }
}
