// libs6350-rs/libs6350/src/transport/io.rs

use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;
use std::time::{Duration, Instant};

use log::trace;

use crate::transport::traits::Transport;
use crate::{Result, utils};

/// Byte streams whose blocking reads can be bounded.
pub trait ReadTimeout {
    /// Limit how long the next `read` on the stream may block.
    fn set_timeout(&mut self, timeout: Duration) -> std::io::Result<()>;
}

impl ReadTimeout for TcpStream {
    fn set_timeout(&mut self, timeout: Duration) -> std::io::Result<()> {
        self.set_read_timeout(Some(timeout))
    }
}

#[cfg(unix)]
impl ReadTimeout for std::os::unix::net::UnixStream {
    fn set_timeout(&mut self, timeout: Duration) -> std::io::Result<()> {
        self.set_read_timeout(Some(timeout))
    }
}

#[cfg(feature = "serialport")]
impl ReadTimeout for Box<dyn serialport::SerialPort> {
    fn set_timeout(&mut self, timeout: Duration) -> std::io::Result<()> {
        serialport::SerialPort::set_timeout(self.as_mut(), timeout).map_err(std::io::Error::from)
    }
}

impl<T: ReadTimeout + ?Sized> ReadTimeout for &mut T {
    fn set_timeout(&mut self, timeout: Duration) -> std::io::Result<()> {
        (**self).set_timeout(timeout)
    }
}

/// Adapter that drives a blocking byte stream, such as a serial port the
/// caller opened and configured (57600 8N1, no handshake), through the
/// `Transport` trait.
///
/// Each `read` gets a deadline of `timeout_ms`; the stream's read timeout is
/// set to the time left before every underlying read. A read stops early on
/// end of stream, at the deadline, or when the stream reports
/// `TimedOut`/`WouldBlock`.
pub struct IoTransport<T> {
    inner: T,
}

impl<T: Read + Write + ReadTimeout> IoTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write + ReadTimeout> Transport for IoTransport<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        trace!("io write: {}", utils::bytes_to_hex_spaced(data));
        self.inner.write_all(data)?;
        self.inner.flush()?;
        Ok(())
    }

    fn read(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        // a zero timeout is rejected by socket streams
        let deadline = Instant::now() + utils::ms(timeout_ms.max(1));
        let mut buf = vec![0u8; n];
        let mut filled = 0;
        while filled < n {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                break;
            }
            self.inner.set_timeout(left)?;
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(got) => filled += got,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => break,
                Err(e) => return Err(e.into()),
            }
        }
        buf.truncate(filled);
        trace!(
            "io read: wanted {} got {} (timeout {} ms): {}",
            n,
            filled,
            timeout_ms,
            utils::bytes_to_hex_spaced(&buf)
        );
        Ok(buf)
    }
}
