// libs6350-rs/libs6350/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the serial link away from protocol logic.
///
/// Implementations block: `write` returns once the bytes are handed to the
/// link, `read` returns as soon as `n` bytes arrived or the timeout elapsed.
pub trait Transport {
    /// Send raw bytes to the reader
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Receive up to `n` bytes, waiting at most `timeout_ms` milliseconds.
    /// A timeout is not an error here: the returned buffer is simply shorter
    /// than `n` and the caller decides what that means.
    fn read(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn read(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).read(n, timeout_ms)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn read(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).read(n, timeout_ms)
    }
}
