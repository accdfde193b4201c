#[path = "../common/mod.rs"]
mod common;

use libs6350::Error;
use libs6350::protocol::codec;
use libs6350::transport::{MockTransport, Transport};

#[test]
fn boxed_mock_serves_replies_in_order() {
    let mut t = common::boxed_mock_with_replies(vec![vec![0x01, 0x02], vec![0x03]]);
    assert_eq!(t.read(3, 10).unwrap(), vec![0x01, 0x02, 0x03]);
    assert!(t.read(1, 10).unwrap().is_empty());
}

#[test]
fn write_failure_propagates_from_send() {
    let mut m = MockTransport::new();
    m.set_write_failures(1);
    let frame = libs6350::protocol::Frame::new(0x60, vec![]);
    assert!(matches!(codec::send_frame(&mut m, &frame), Err(Error::Io(_))));
    codec::send_frame(&mut m, &frame).unwrap();
    assert_eq!(m.sent.len(), 1);
}
