//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build reader replies and wrap transports so tests across
//! the crate and the tests/ directory can share the same setup.
#![allow(dead_code)]

mod simulated;

pub use simulated::SimulatedReader;

use std::cell::RefCell;
use std::rc::Rc;

use crate::Result;
use crate::constants::{CMD_ISO_PASSTHROUGH, ERROR_FLAGS, HOST_FLAGS};
use crate::protocol::Frame;
use crate::transport::{MockTransport, Transport};
use crate::types::Uid;

/// Transport that delegates into an `Rc<RefCell<T>>`, so a test can keep
/// inspecting the inner transport after handing it to an engine.
#[doc(hidden)]
pub struct SharedTransport<T> {
    inner: Rc<RefCell<T>>,
}

impl<T: Transport> SharedTransport<T> {
    pub fn new(inner: Rc<RefCell<T>>) -> Self {
        Self { inner }
    }
}

impl<T: Transport> Transport for SharedTransport<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().write(data)
    }

    fn read(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read(n, timeout_ms)
    }
}

/// One 10-byte tag block: reserved byte, DSFID, UID least significant
/// byte first.
#[doc(hidden)]
pub fn tag_block(uid: u64, dsfid: u8) -> Vec<u8> {
    let mut block = vec![0x00, dsfid];
    block.extend_from_slice(&Uid::from_u64(uid).to_wire());
    block
}

/// Encoded inventory reply frame with the given slot flags and tag blocks.
#[doc(hidden)]
pub fn inventory_reply(valid: u16, collisions: u16, blocks: &[Vec<u8>]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(4 + blocks.len() * 10);
    payload.extend_from_slice(&valid.to_le_bytes());
    payload.extend_from_slice(&collisions.to_le_bytes());
    for block in blocks {
        payload.extend_from_slice(block);
    }
    Frame::with_flags(HOST_FLAGS, CMD_ISO_PASSTHROUGH, payload)
        .encode()
        .expect("inventory reply fits in a frame")
}

/// Encoded ISO error reply carrying `code`.
#[doc(hidden)]
pub fn iso_error_reply(code: u8) -> Vec<u8> {
    Frame::with_flags(ERROR_FLAGS, CMD_ISO_PASSTHROUGH, vec![code])
        .encode()
        .expect("error reply fits in a frame")
}

/// Build a MockTransport pre-seeded with the given replies and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_replies(replies: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for reply in replies {
        mock.push_response(reply);
    }
    Box::new(mock)
}
