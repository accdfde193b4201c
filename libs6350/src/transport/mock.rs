// libs6350-rs/libs6350/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and serves
/// queued reply bytes as one continuous stream, so a read that asks for
/// more than is queued comes back short, like a serial port timing out.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub rx: VecDeque<u8>,
    /// Record read calls: (requested bytes, timeout)
    pub reads: Vec<(usize, u64)>,
    /// Testing hook: number of subsequent writes that should fail
    pub write_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent write calls should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Queue bytes the reader will "send" back.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.rx.extend(resp);
    }

    pub fn pending_rx(&self) -> usize {
        self.rx.len()
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock write failure",
            )));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        self.reads.push((n, timeout_ms));
        let take = n.min(self.rx.len());
        Ok(self.rx.drain(..take).collect())
    }
}
