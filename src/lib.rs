//! # Recibo - ESC/POS Receipt Printer Driver
//!
//! Recibo is a Rust library for driving thermal receipt printers that speak
//! the ESC/POS command protocol over a byte-oriented serial link. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders (text styling,
//!   alignment, code pages, cutting, cash drawer, print density)
//! - **Raster graphics**: bitmap conversion into 24-row vertical bit-image bands
//! - **Barcodes**: validated 1D barcode encoding (UPC, EAN, Code39, ITF, NW-7)
//! - **Transport**: serial, TCP, and in-memory test backends
//!
//! ## Quick Start
//!
//! ```no_run
//! use recibo::{Printer, transport::SerialTransport};
//! use recibo::protocol::text::{Alignment, TextType};
//!
//! // Open a connection to the printer
//! let mut printer = Printer::new(SerialTransport::new());
//! printer.open("/dev/serial0", 9600)?;
//!
//! // Print a small receipt
//! printer.init()?;
//! printer.set_align(Alignment::Center)?;
//! printer.set_text_type(TextType::Bold)?;
//! printer.print_ln("RECIBO MART")?;
//! printer.set_text_type(TextType::Normal)?;
//! printer.print_ln("thank you, come again")?;
//! printer.print_qr("https://example.com")?;
//! printer.cut_partial()?;
//! printer.close()?;
//!
//! # Ok::<(), recibo::ReciboError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`raster`] | Bitmap to bit-image band conversion |
//! | [`transport`] | Communication backends |
//! | [`printer`] | The printer session |
//! | [`error`] | Error types |
//!
//! ## Protocol Notes
//!
//! The command encodings target Epson ESC/POS compatible firmware, as found
//! in most inexpensive 58mm/80mm thermal receipt printers. Every command is
//! an absolute state write: the library tracks no printer-side style state,
//! so each call is idempotent and self-contained.

pub mod error;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod transport;

// Re-exports for convenience
pub use error::ReciboError;
pub use printer::Printer;
pub use transport::{SerialTransport, Transport};
