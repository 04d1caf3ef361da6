//! # TCP Transport
//!
//! Raw TCP printing, as spoken by networked receipt printers and print
//! servers listening on port 9100 ("JetDirect" style). The stream carries
//! the same byte protocol as a serial link; there is no job framing and
//! no read path.

use std::io::Write;
use std::net::{Shutdown, TcpStream};

use crate::error::ReciboError;
use crate::transport::Transport;

/// Default printer address: raw-printing port on the local host
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:9100";

/// # TCP Printer Transport
///
/// Connects to `host:port` and writes command bytes to the socket.
/// The `baud_rate` parameter of [`Transport::open`] is ignored since a
/// TCP link has no line rate.
pub struct TcpTransport {
    stream: Option<TcpStream>,
}

impl TcpTransport {
    /// Create a transport in the closed state.
    pub fn new() -> Self {
        Self { stream: None }
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for TcpTransport {
    fn open(&mut self, address: &str, _baud_rate: u32) -> Result<(), ReciboError> {
        let stream = TcpStream::connect(address).map_err(|e| {
            ReciboError::Transport(format!("Failed to connect to {}: {}", address, e))
        })?;
        // One command sequence is one logical unit; don't batch small writes.
        stream
            .set_nodelay(true)
            .map_err(|e| ReciboError::Transport(format!("set_nodelay failed: {}", e)))?;
        self.stream = Some(stream);
        Ok(())
    }

    fn open_default(&mut self) -> Result<(), ReciboError> {
        self.open(DEFAULT_ADDRESS, 0)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ReciboError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| ReciboError::Transport("TCP connection is not open".to_string()))?;
        stream
            .write_all(bytes)
            .map_err(|e| ReciboError::Transport(format!("Write failed: {}", e)))?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), ReciboError> {
        if let Some(stream) = self.stream.take() {
            stream
                .shutdown(Shutdown::Both)
                .map_err(|e| ReciboError::Transport(format!("Shutdown failed: {}", e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_write_before_open_fails() {
        let mut transport = TcpTransport::new();
        assert!(transport.write_bytes(b"x").is_err());
    }

    #[test]
    fn test_close_without_open_is_ok() {
        let mut transport = TcpTransport::new();
        assert!(transport.close().is_ok());
    }

    #[test]
    fn test_round_trip_to_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).unwrap();
            received
        });

        let mut transport = TcpTransport::new();
        transport.open(&addr, 0).unwrap();
        transport.write_bytes(&[0x1B, 0x40]).unwrap();
        transport.write_bytes(b"hello").unwrap();
        transport.close().unwrap();

        let received = server.join().unwrap();
        assert_eq!(received, [&[0x1B, 0x40], b"hello".as_slice()].concat());
    }
}
