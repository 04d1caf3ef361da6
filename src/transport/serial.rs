//! # Serial Device Transport
//!
//! This module provides communication with receipt printers attached via
//! a serial device node (`/dev/serial0`, `/dev/ttyUSB0`, ...).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data is transmitted without
//! modification:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, etc. cleared
//! - **No output processing**: OPOST cleared (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON cleared
//!
//! IXON/IXOFF/IXANY are cleared as well: 0x11 (XON) and 0x13 (XOFF) occur
//! freely in packed raster data, and software flow control would eat them.
//!
//! The requested baud rate is applied to both directions even though the
//! protocol is send-only; mismatched input speed confuses some USB-serial
//! drivers.
//!
//! ## Chunked Writes
//!
//! Large command streams (raster images mostly) are written in chunks with
//! a small delay between them so the printer's input buffer can drain.
//! Default chunk size is 4096 bytes.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::error::ReciboError;
use crate::transport::Transport;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/serial0";

/// Default baud rate for receipt printers
pub const DEFAULT_BAUD: u32 = 9600;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Serial Printer Transport
///
/// Manages a connection to a printer over a serial device node.
///
/// ## Example
///
/// ```no_run
/// use recibo::transport::{SerialTransport, Transport};
/// use recibo::protocol::commands;
///
/// let mut transport = SerialTransport::new();
/// transport.open("/dev/ttyUSB0", 19200)?;
/// transport.write_bytes(&commands::init())?;
/// transport.close()?;
///
/// # Ok::<(), recibo::ReciboError>(())
/// ```
pub struct SerialTransport {
    file: Option<File>,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Create a transport in the closed state. Call
    /// [`open`](Transport::open) before writing.
    pub fn new() -> Self {
        Self {
            file: None,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        }
    }

    /// Set the chunk size for large writes.
    ///
    /// Larger chunks are faster but can overflow slow printer buffers.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    fn file_mut(&mut self) -> Result<&mut File, ReciboError> {
        self.file
            .as_mut()
            .ok_or_else(|| ReciboError::Transport("serial port is not open".to_string()))
    }
}

impl Default for SerialTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SerialTransport {
    fn open(&mut self, address: &str, baud_rate: u32) -> Result<(), ReciboError> {
        let file = OpenOptions::new().write(true).open(address).map_err(|e| {
            ReciboError::Transport(format!("Failed to open {}: {}", address, e))
        })?;

        configure_serial_raw(&file, baud_rate)?;

        self.file = Some(file);
        Ok(())
    }

    fn open_default(&mut self) -> Result<(), ReciboError> {
        self.open(DEFAULT_DEVICE, DEFAULT_BAUD)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ReciboError> {
        if bytes.is_empty() {
            return Ok(());
        }

        let chunk_size = self.chunk_size;
        let chunk_delay = self.chunk_delay;
        let file = self.file_mut()?;

        if bytes.len() <= chunk_size {
            // Small write - send directly
            file.write_all(bytes)
                .map_err(|e| ReciboError::Transport(format!("Write failed: {}", e)))?;
        } else {
            // Large write - chunk it
            for chunk in bytes.chunks(chunk_size) {
                file.write_all(chunk)
                    .map_err(|e| ReciboError::Transport(format!("Write failed: {}", e)))?;

                if !chunk_delay.is_zero() {
                    thread::sleep(chunk_delay);
                }
            }
        }

        file.flush()
            .map_err(|e| ReciboError::Transport(format!("Flush failed: {}", e)))?;

        Ok(())
    }

    fn close(&mut self) -> Result<(), ReciboError> {
        if let Some(mut file) = self.file.take() {
            file.flush()
                .map_err(|e| ReciboError::Transport(format!("Flush failed: {}", e)))?;
        }
        Ok(())
    }
}

/// Map a numeric baud rate to its termios speed constant.
#[cfg(unix)]
fn baud_constant(baud_rate: u32) -> Result<libc::speed_t, ReciboError> {
    let speed = match baud_rate {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        230400 => libc::B230400,
        other => {
            return Err(ReciboError::Transport(format!(
                "Unsupported baud rate: {}",
                other
            )));
        }
    };
    Ok(speed)
}

/// Configure a serial device for raw binary transmission at the given rate.
///
/// Clears all input/output processing so command bytes pass through
/// unmodified, sets 8-bit characters with no parity, and applies the baud
/// rate in both directions.
#[cfg(unix)]
fn configure_serial_raw(file: &File, baud_rate: u32) -> Result<(), ReciboError> {
    use std::io;
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    let speed = baud_constant(baud_rate)?;

    // Get current terminal attributes
    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(ReciboError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: disable all processing.
    // IXON/IXOFF/IXANY: XON (0x11) and XOFF (0x13) appear in raster data.
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: disable post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: disable echo, canonical mode, signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8-bit characters, no parity
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    // Line rate, both directions
    let rate_ok = unsafe {
        libc::cfsetispeed(&mut termios, speed) == 0
            && libc::cfsetospeed(&mut termios, speed) == 0
    };
    if !rate_ok {
        return Err(ReciboError::Transport(format!(
            "Failed to set baud rate {}: {}",
            baud_rate,
            io::Error::last_os_error()
        )));
    }

    // Apply settings immediately
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(ReciboError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_serial_raw(_file: &File, _baud_rate: u32) -> Result<(), ReciboError> {
    // On non-Unix platforms, skip TTY configuration.
    // The device may work differently.
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
