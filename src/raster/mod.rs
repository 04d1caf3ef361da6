//! # Raster Image Conversion
//!
//! This module converts a grayscale bitmap into the printer's vertical
//! bit-image band commands.
//!
//! ## Band Geometry
//!
//! The print head exposes graphics as horizontal strips exactly 24 dots
//! tall. An image of height `H` becomes `ceil(H / 24)` bands; the last
//! band is padded with white rows up to 24.
//!
//! ```text
//! (0,0) ──────────────────────► X (columns)
//!   │   ┌──────────────────┐
//!   │   │      band 0      │ 24 rows
//!   │   ├──────────────────┤
//!   │   │      band 1      │ 24 rows
//!   │   ├──────────────────┤
//!   │   │ band 2 ░░░░░░░░░ │ remainder + white padding
//!   ▼   └──────────────────┘
//!   Y
//! ```
//!
//! ## Column Packing
//!
//! Within a band the data is **column-major**: each column's 24 vertical
//! dots pack into 3 bytes, top dot in the most-significant bit of the
//! first byte:
//!
//! ```text
//! row  0 → byte 0, bit 7        row 12 → byte 1, bit 3
//! row  7 → byte 0, bit 0        row 23 → byte 2, bit 0
//! ```
//!
//! A fully black column is `FF FF FF`; fully white is `00 00 00`.
//!
//! ## Band Framing
//!
//! Each band is wrapped in:
//!
//! ```text
//! ESC 3 24              line spacing = band height
//! ESC * 33 nL nH        bit-image mode, little-endian column count
//! <3 × width bytes>     packed columns, left to right
//! LF                    print the band
//! ```
//!
//! After the last band a trailing `LF` prints any remainder and
//! `ESC 3 30` restores text line spacing.

use image::GrayImage;

use crate::protocol::commands::{self, ESC, LF, u16_le};

/// Rows per vertical bit-image band
pub const BAND_ROWS: u32 = 24;

/// Luma cutoff: pixels strictly below this print black.
///
/// The conversion must be deterministic and monotonic in brightness;
/// a fixed mid-scale threshold satisfies both. Gamma-aware luminance is
/// already applied upstream by the grayscale conversion.
pub const BLACK_THRESHOLD: u8 = 128;

/// # Select Bit-Image Mode (ESC * 33)
///
/// Selects 24-dot double-density vertical bit-image mode. Followed on the
/// wire by the little-endian column count and the packed column data.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC * 33 |
/// | Hex     | 1B 2A 21 |
#[inline]
pub fn bit_image_mode() -> Vec<u8> {
    vec![ESC, b'*', 33]
}

/// Number of bands an image of the given height produces.
#[inline]
pub fn band_count(height: u32) -> u32 {
    height.div_ceil(BAND_ROWS)
}

/// Whether the pixel at (x, y) prints black.
///
/// Rows past the bottom edge are the white padding of the final band.
#[inline]
fn is_black(img: &GrayImage, x: u32, y: u32) -> bool {
    y < img.height() && img.get_pixel(x, y).0[0] < BLACK_THRESHOLD
}

/// Pack one column of a band into its 3-byte vertical slice.
///
/// `band_top` is the image row of the band's first dot; the 24 dots from
/// there down map MSB-first into the returned bytes.
fn pack_column(img: &GrayImage, x: u32, band_top: u32) -> [u8; 3] {
    let mut slice = [0u8; 3];
    for dot in 0..BAND_ROWS {
        if is_black(img, x, band_top + dot) {
            slice[(dot / 8) as usize] |= 0x80 >> (dot % 8);
        }
    }
    slice
}

/// Pack a whole band's payload: `3 × width` bytes, columns left to right.
pub fn band_payload(img: &GrayImage, band_top: u32) -> Vec<u8> {
    let mut payload = Vec::with_capacity(3 * img.width() as usize);
    for x in 0..img.width() {
        payload.extend(pack_column(img, x, band_top));
    }
    payload
}

/// # Convert a Bitmap to Bit-Image Band Commands
///
/// Produces the complete command stream for the image: one framed band
/// per 24 rows, then a trailing line feed and the text line spacing
/// restore. A zero-height image emits no bands, only the trailer.
///
/// ## Example
///
/// ```
/// use image::GrayImage;
/// use recibo::raster;
///
/// // 8 wide, 30 tall → 2 bands
/// let img = GrayImage::from_pixel(8, 30, image::Luma([0u8]));
/// let cmd = raster::commands(&img);
/// assert_eq!(&cmd[0..3], &[0x1B, 0x33, 24]);       // line spacing 24
/// assert_eq!(&cmd[3..6], &[0x1B, 0x2A, 33]);       // bit-image mode
/// assert_eq!(&cmd[6..8], &[8, 0]);                 // 8 columns, LE
/// ```
pub fn commands(img: &GrayImage) -> Vec<u8> {
    debug_assert!(
        img.width() <= u16::MAX as u32,
        "column count must fit the 16-bit count field, got {}",
        img.width()
    );

    let bands = band_count(img.height());
    let band_len = 8 + 3 * img.width() as usize + 1;
    let mut out = Vec::with_capacity(bands as usize * band_len + 4);

    for band in 0..bands {
        out.extend(commands::line_spacing_24());
        out.extend(bit_image_mode());
        out.extend(u16_le(img.width() as u16));
        out.extend(band_payload(img, band * BAND_ROWS));
        out.push(LF);
    }

    out.push(LF);
    out.extend(commands::line_spacing_30());
    out
}

// ============================================================================
// TESTS
// ============================================================================
