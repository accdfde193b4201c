#![allow(dead_code)]

pub mod fixtures;

pub use libs6350::test_support::{
    SharedTransport, SimulatedReader, boxed_mock_with_replies, inventory_reply, iso_error_reply,
    tag_block,
};

/// Route `log` output through the test harness when RUST_LOG is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
