//! # Printer Session
//!
//! This module ties the protocol builders, the raster converter, and a
//! transport together into one printer session.
//!
//! ## Design
//!
//! The session is deliberately stateless: it tracks no current alignment,
//! font, or style. Every setter emits an absolute command sequence that
//! fully determines the printer-side state it touches, so calls are
//! idempotent and self-contained. The only state held between calls is
//! the transport handle itself.
//!
//! Operations perform zero or more ordered blocking writes and return
//! after all complete or one fails. A transport failure aborts the
//! in-flight call; bytes already sent are not retracted (the protocol has
//! no undo), so callers wanting a clean slate afterwards should
//! [`init`](Printer::init).

use image::GrayImage;
use qrcode::QrCode;
use std::path::Path;

use crate::error::ReciboError;
use crate::protocol::barcode::BarcodeSpec;
use crate::protocol::commands::{self, CutMode, Density, DrawerPin, LF};
use crate::protocol::text::{self, Alignment, CodePage, Font, TextSize, TextType};
use crate::protocol::cp437;
use crate::raster;
use crate::transport::Transport;

/// Default QR bitmap size in pixels
const QR_DEFAULT_SIZE: u32 = 150;

/// Lines fed before cutting, to push the last printed line past the blade
const CUT_FEED_LINES: usize = 6;

/// # Printer Session
///
/// Owns a [`Transport`] exclusively for its lifetime and sequences
/// command writes to it.
///
/// ## Example
///
/// ```
/// use recibo::{Printer, transport::MockTransport};
///
/// let mut printer = Printer::new(MockTransport::new());
/// printer.open_default()?;
/// printer.init()?;
/// printer.print_ln("hello")?;
/// # Ok::<(), recibo::ReciboError>(())
/// ```
pub struct Printer<T: Transport> {
    transport: T,
}

impl<T: Transport> Printer<T> {
    /// Create a session around a transport. The transport may be opened
    /// before or after via [`open`](Printer::open).
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consume the session, returning the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), ReciboError> {
        self.transport.write_bytes(bytes)
    }

    // ------------------------------------------------------------------
    // Transport passthrough
    // ------------------------------------------------------------------

    /// Open the transport to the given address at the given rate.
    pub fn open(&mut self, address: &str, baud_rate: u32) -> Result<(), ReciboError> {
        self.transport.open(address, baud_rate)
    }

    /// Open the transport with its default address.
    pub fn open_default(&mut self) -> Result<(), ReciboError> {
        self.transport.open_default()
    }

    /// Close the transport.
    pub fn close(&mut self) -> Result<(), ReciboError> {
        self.transport.close()
    }

    // ------------------------------------------------------------------
    // Hardware
    // ------------------------------------------------------------------

    /// Hardware reset (`ESC @`): clears the buffer and all modes.
    pub fn init(&mut self) -> Result<(), ReciboError> {
        self.write(&commands::init())
    }

    /// Cut the paper, feeding 6 lines first so the last printed line
    /// clears the cutter blade.
    pub fn cut(&mut self, mode: CutMode) -> Result<(), ReciboError> {
        let mut cmd = vec![LF; CUT_FEED_LINES];
        cmd.extend(commands::cut(mode));
        self.write(&cmd)
    }

    /// Full cut.
    pub fn cut_full(&mut self) -> Result<(), ReciboError> {
        self.cut(CutMode::Full)
    }

    /// Partial cut (leaves a hinge).
    pub fn cut_partial(&mut self) -> Result<(), ReciboError> {
        self.cut(CutMode::Partial)
    }

    /// Pulse the cash drawer kick connector.
    pub fn open_cash_drawer(&mut self, pin: DrawerPin) -> Result<(), ReciboError> {
        self.write(&commands::cash_drawer(pin))
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Print text as UTF-8 bytes, without a trailing line feed.
    pub fn print(&mut self, text: &str) -> Result<(), ReciboError> {
        self.write(text.as_bytes())
    }

    /// Print text followed by a line feed.
    pub fn print_ln(&mut self, text: &str) -> Result<(), ReciboError> {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(LF);
        self.write(&bytes)
    }

    /// Print text encoded as Code Page 437.
    ///
    /// The printer must have the USA page selected
    /// ([`set_code_page`](Printer::set_code_page) with [`CodePage::Usa`]).
    /// Characters outside CP437 fail with [`ReciboError::Encoding`] before
    /// anything is written.
    pub fn print_cp437(&mut self, text: &str) -> Result<(), ReciboError> {
        let bytes = cp437::encode(text)?;
        self.write(&bytes)
    }

    /// Feed one line.
    pub fn line_feed(&mut self) -> Result<(), ReciboError> {
        self.write(&commands::line_feed())
    }

    /// Feed `n` lines.
    pub fn line_feeds(&mut self, n: usize) -> Result<(), ReciboError> {
        self.write(&vec![LF; n])
    }

    // ------------------------------------------------------------------
    // Style setters (all absolute, see module docs)
    // ------------------------------------------------------------------

    /// Set character size.
    pub fn set_text_size(&mut self, size: TextSize) -> Result<(), ReciboError> {
        self.write(&text::size(size))
    }

    /// Set the bold/underline style pair.
    pub fn set_text_type(&mut self, t: TextType) -> Result<(), ReciboError> {
        self.write(&text::text_type(t))
    }

    /// Select the character font.
    pub fn set_text_font(&mut self, f: Font) -> Result<(), ReciboError> {
        self.write(&text::font(f))
    }

    /// Set line alignment.
    pub fn set_align(&mut self, a: Alignment) -> Result<(), ReciboError> {
        self.write(&text::align(a))
    }

    /// Set print density.
    pub fn set_density(&mut self, d: Density) -> Result<(), ReciboError> {
        self.write(&commands::density(d))
    }

    /// Select the character code table.
    pub fn set_code_page(&mut self, page: CodePage) -> Result<(), ReciboError> {
        self.write(&text::codepage(page))
    }

    /// Set alignment, font, type, and size in one call; density only when
    /// given, so the common "everything back to normal" reset leaves the
    /// configured density alone.
    pub fn set_text_properties(
        &mut self,
        align: Alignment,
        font: Font,
        text_type: TextType,
        size: TextSize,
        density: Option<Density>,
    ) -> Result<(), ReciboError> {
        self.set_align(align)?;
        self.set_text_font(font)?;
        self.set_text_type(text_type)?;
        self.set_text_size(size)?;
        if let Some(d) = density {
            self.set_density(d)?;
        }
        Ok(())
    }

    /// Reset every text property to its default.
    pub fn set_text_normal(&mut self) -> Result<(), ReciboError> {
        self.set_text_properties(
            Alignment::Left,
            Font::A,
            TextType::Normal,
            TextSize::Normal,
            None,
        )
    }

    // ------------------------------------------------------------------
    // Barcodes
    // ------------------------------------------------------------------

    /// Print a 1D barcode. The spec is validated before any byte is
    /// written, so a rejected request leaves the printer untouched.
    pub fn print_barcode(&mut self, data: &str, spec: &BarcodeSpec) -> Result<(), ReciboError> {
        let cmd = spec.encode(data.as_bytes())?;
        self.write(&cmd)
    }

    // ------------------------------------------------------------------
    // Graphics
    // ------------------------------------------------------------------

    /// Print a grayscale bitmap through the raster band pipeline.
    pub fn print_bitmap(&mut self, img: &GrayImage) -> Result<(), ReciboError> {
        self.write(&raster::commands(img))
    }

    /// Decode an image file and print it.
    pub fn print_image<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ReciboError> {
        let img = image::open(path.as_ref()).map_err(|e| {
            ReciboError::ImageDecode(format!("{}: {}", path.as_ref().display(), e))
        })?;
        self.print_bitmap(&img.to_luma8())
    }

    /// Generate a QR code bitmap for `value` and print it, at the default
    /// size of 150 pixels.
    pub fn print_qr(&mut self, value: &str) -> Result<(), ReciboError> {
        self.print_qr_sized(value, QR_DEFAULT_SIZE)
    }

    /// Generate a QR code bitmap at least `size` pixels square and print it.
    pub fn print_qr_sized(&mut self, value: &str, size: u32) -> Result<(), ReciboError> {
        let code = QrCode::new(value.as_bytes())
            .map_err(|e| ReciboError::QrGeneration(format!("{:?}: {}", value, e)))?;
        let bitmap: GrayImage = code
            .render::<image::Luma<u8>>()
            .min_dimensions(size, size)
            .build();
        self.print_bitmap(&bitmap)
    }
}

// ============================================================================
// TESTS
// ============================================================================
