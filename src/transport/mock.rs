//! # Mock Transport
//!
//! An in-memory byte sink that records everything written to it. This is
//! the test seam for the whole crate: command encodings are asserted
//! byte-for-byte against the recorded stream, with no hardware attached.
//!
//! The mock can also be armed to fail after a set number of writes, for
//! exercising the abort-on-transport-failure path.

use crate::error::ReciboError;
use crate::transport::Transport;

/// # In-Memory Printer Transport
///
/// ## Example
///
/// ```
/// use recibo::transport::{MockTransport, Transport};
///
/// let mut transport = MockTransport::new();
/// transport.open_default().unwrap();
/// transport.write_bytes(&[0x1B, 0x40]).unwrap();
/// assert_eq!(transport.written(), &[0x1B, 0x40]);
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    open: bool,
    written: Vec<u8>,
    write_count: usize,
    fail_after: Option<usize>,
}

impl MockTransport {
    /// Create a closed mock with an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every byte written so far, in write order.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Number of `write_bytes` calls accepted so far.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Whether the transport is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Clear the recording (the open state is kept).
    pub fn clear(&mut self) {
        self.written.clear();
        self.write_count = 0;
    }

    /// Arm the mock to reject the write after `n` more successful ones.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }
}

impl Transport for MockTransport {
    fn open(&mut self, _address: &str, _baud_rate: u32) -> Result<(), ReciboError> {
        self.open = true;
        Ok(())
    }

    fn open_default(&mut self) -> Result<(), ReciboError> {
        self.open("mock", 0)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ReciboError> {
        if !self.open {
            return Err(ReciboError::Transport("mock transport is not open".to_string()));
        }
        if let Some(remaining) = self.fail_after {
            if remaining == 0 {
                return Err(ReciboError::Transport("mock write failure".to_string()));
            }
            self.fail_after = Some(remaining - 1);
        }
        self.written.extend_from_slice(bytes);
        self.write_count += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), ReciboError> {
        self.open = false;
        Ok(())
    }
}
