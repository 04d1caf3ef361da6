//! # Error Types
//!
//! This module defines error types used throughout the recibo library.

use thiserror::Error;

/// Main error type for recibo operations
///
/// Errors are never retried or swallowed: every failure aborts the current
/// call. Bytes already written to the transport before a failure stay
/// written (the protocol has no undo primitive), so callers that need a
/// clean slate after an error should issue a hardware reset
/// ([`init`](crate::Printer::init)).
#[derive(Debug, Error)]
pub enum ReciboError {
    /// Barcode width or height outside the printable range
    #[error("Invalid barcode dimension: {0}")]
    InvalidBarcodeDimension(String),

    /// Barcode payload the symbology cannot carry (e.g. empty data)
    #[error("Invalid barcode data: {0}")]
    InvalidBarcodeData(String),

    /// Text that cannot be encoded for the selected code page
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Image file could not be decoded into a bitmap
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// QR code generation failed (e.g. data too long for any version)
    #[error("QR generation error: {0}")]
    QrGeneration(String),

    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
