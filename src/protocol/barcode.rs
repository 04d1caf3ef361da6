//! # ESC/POS 1D Barcode Commands
//!
//! This module validates barcode print requests and encodes them into the
//! command sequence the firmware expects.
//!
//! ## Supported Symbologies
//!
//! | Symbology | Selector | Typical use |
//! |-----------|----------|-------------|
//! | UPC-A     | 1D 6B 00 | US retail (12 digits) |
//! | UPC-E     | 1D 6B 01 | Compressed UPC (6 digits) |
//! | EAN-13    | 1D 6B 02 | International retail (13 digits) |
//! | EAN-8     | 1D 6B 03 | Small packages (8 digits) |
//! | Code39    | 1D 6B 04 | Alphanumeric, self-checking |
//! | ITF       | 1D 6B 05 | Numeric pairs (cartons) |
//! | NW-7      | 1D 6B 06 | Codabar (libraries, blood banks) |
//!
//! ## Command Sequence
//!
//! A barcode print is a fixed sequence of parameter commands followed by
//! the payload:
//!
//! ```text
//! ESC a 1      center alignment
//! GS h n       bar height in dots   (2-255)
//! GS w n       module width unit    (1-255)
//! GS f n       HRI font A/B
//! GS H n       HRI position off/above/below/both
//! GS k m data  symbology selector + payload bytes
//! LF           print
//! ```
//!
//! All parameters are range-checked before any byte is produced, so a
//! rejected request writes nothing to the printer.

use super::commands::{ESC, GS, LF};
use crate::error::ReciboError;

// ============================================================================
// PARAMETER ENUMS
// ============================================================================

/// 1D barcode symbologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symbology {
    /// UPC-A (12 digits)
    UpcA = 0,
    /// UPC-E (6 digits, compressed UPC-A)
    UpcE = 1,
    /// EAN-13 / JAN-13 (13 digits, the fallback symbology)
    #[default]
    Ean13 = 2,
    /// EAN-8 / JAN-8 (8 digits)
    Ean8 = 3,
    /// Code39 (A-Z, 0-9, space, -.$/%+)
    Code39 = 4,
    /// ITF (Interleaved 2 of 5, numeric pairs)
    Itf = 5,
    /// NW-7 / Codabar
    Nw7 = 6,
}

impl Symbology {
    /// Look up a symbology by its conventional name.
    ///
    /// Unrecognized names fall back to [`Symbology::Ean13`]. Like the code
    /// page lookup, this is an intentional default-selection policy rather
    /// than an error path.
    ///
    /// ```
    /// use recibo::protocol::barcode::Symbology;
    ///
    /// assert_eq!(Symbology::from_name("CODE39"), Symbology::Code39);
    /// assert_eq!(Symbology::from_name("AZTEC"), Symbology::Ean13);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "UPC-A" => Symbology::UpcA,
            "UPC-E" => Symbology::UpcE,
            "EAN13" => Symbology::Ean13,
            "EAN8" => Symbology::Ean8,
            "CODE39" => Symbology::Code39,
            "ITF" => Symbology::Itf,
            "NW7" => Symbology::Nw7,
            _ => Symbology::Ean13,
        }
    }
}

/// HRI (human readable interpretation) text position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriPosition {
    /// No HRI text printed
    Off = 0,
    /// HRI above the bars
    Above = 1,
    /// HRI below the bars (default)
    #[default]
    Below = 2,
    /// HRI both above and below
    Both = 3,
}

/// HRI font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriFont {
    /// Font A (12×24 dots)
    #[default]
    A = 0,
    /// Font B (9×17 dots)
    B = 1,
}

// ============================================================================
// BARCODE SPEC
// ============================================================================

/// Validated parameters for one barcode print request
///
/// Width and height are held as `u16` so out-of-range caller values are
/// representable and rejected by [`encode`](BarcodeSpec::encode) instead of
/// being silently truncated at the type boundary.
///
/// ## Example
///
/// ```
/// use recibo::protocol::barcode::{BarcodeSpec, Symbology};
///
/// let spec = BarcodeSpec {
///     symbology: Symbology::Code39,
///     height: 100,
///     ..Default::default()
/// };
/// let cmd = spec.encode(b"HELLO-123").unwrap();
/// assert_eq!(&cmd[..3], &[0x1B, 0x61, 0x01]); // starts centered
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeSpec {
    /// Which symbology to print
    pub symbology: Symbology,
    /// Module width unit, valid range [1, 255]
    pub width: u16,
    /// Bar height in dots, valid range [2, 255]
    pub height: u16,
    /// Where to print the human-readable text
    pub hri_position: HriPosition,
    /// Which font the human-readable text uses
    pub hri_font: HriFont,
}

impl Default for BarcodeSpec {
    /// EAN-13 at the firmware's customary module width 3 and height 100.
    fn default() -> Self {
        Self {
            symbology: Symbology::Ean13,
            width: 3,
            height: 100,
            hri_position: HriPosition::Below,
            hri_font: HriFont::A,
        }
    }
}

impl BarcodeSpec {
    /// Range-check the spec and payload without encoding anything.
    ///
    /// ## Errors
    ///
    /// - [`ReciboError::InvalidBarcodeDimension`] if `height` is outside
    ///   [2, 255] or `width` is outside [1, 255]
    /// - [`ReciboError::InvalidBarcodeData`] if `data` is empty
    pub fn validate(&self, data: &[u8]) -> Result<(), ReciboError> {
        if !(2..=255).contains(&self.height) {
            return Err(ReciboError::InvalidBarcodeDimension(format!(
                "height {} not in 2..=255",
                self.height
            )));
        }
        if !(1..=255).contains(&self.width) {
            return Err(ReciboError::InvalidBarcodeDimension(format!(
                "width {} not in 1..=255",
                self.width
            )));
        }
        if data.is_empty() {
            return Err(ReciboError::InvalidBarcodeData(
                "barcode payload is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// # Encode a Barcode Print Request
    ///
    /// Validates the spec, then produces the full command sequence:
    /// center alignment, height, width, HRI font, HRI position, symbology
    /// selector, payload bytes, line feed.
    ///
    /// Validation happens before any byte is assembled, so a rejected
    /// request produces no partial output.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, ReciboError> {
        self.validate(data)?;

        let mut cmd = Vec::with_capacity(18 + data.len() + 1);
        cmd.extend([ESC, b'a', 0x01]); // center the bars
        cmd.extend([GS, b'h', self.height as u8]);
        cmd.extend([GS, b'w', self.width as u8]);
        cmd.extend([GS, b'f', self.hri_font as u8]);
        cmd.extend([GS, b'H', self.hri_position as u8]);
        cmd.extend([GS, b'k', self.symbology as u8]);
        cmd.extend_from_slice(data);
        cmd.push(LF);
        Ok(cmd)
    }
}

// ============================================================================
// TESTS
// ============================================================================
