//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! spoken by Epson-compatible thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Hardware commands (init, cut, feed, drawer, density)
//! - [`text`]: Text styling (alignment, fonts, size, bold/underline, code pages)
//! - [`barcode`]: 1D barcode encoding with parameter validation
//! - [`cp437`]: Strict Code Page 437 text encoding
//!
//! ## Usage Example
//!
//! ```
//! use recibo::protocol::{commands, text};
//! use recibo::protocol::text::{Alignment, TextType};
//!
//! // Build a simple print sequence
//! let mut data = Vec::new();
//!
//! // Initialize printer
//! data.extend(commands::init());
//!
//! // Set text style
//! data.extend(text::align(Alignment::Center));
//! data.extend(text::text_type(TextType::Bold));
//! data.extend(b"RECEIPT\n");
//! data.extend(text::text_type(TextType::Normal));
//! data.extend(text::align(Alignment::Left));
//!
//! // Feed and cut
//! data.extend(commands::line_feed());
//! data.extend(commands::cut_partial());
//!
//! // Send `data` to printer via transport...
//! ```
//!
//! ## Protocol Reference
//!
//! Command encodings follow the Epson "ESC/POS Application Programming
//! Guide". Each builder returns the exact byte sequence the firmware
//! expects; multi-byte integer parameters are little-endian.

pub mod barcode;
pub mod commands;
pub mod cp437;
pub mod text;
