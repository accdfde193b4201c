#[path = "../common/mod.rs"]
mod common;

use libs6350::protocol::{checksum_pair, complement, xor_checksum};

#[test]
fn xor_and_complement_examples() {
    assert_eq!(xor_checksum(&[0x01, 0x0d, 0x00, 0x00]), 0x0c);
    assert_eq!(complement(0x0c), 0xf3);
    assert_eq!(xor_checksum(&[]), 0x00);
}

#[test]
fn fixture_frames_carry_consistent_pairs() {
    for frame in [
        common::fixtures::single_tag_reply(),
        common::fixtures::unmasked_inventory_request(),
    ] {
        let n = frame.len();
        assert_eq!(checksum_pair(&frame[..n - 2]), [frame[n - 2], frame[n - 1]]);
    }
}
