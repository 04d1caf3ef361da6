//! # ESC/POS Hardware Commands
//!
//! This module implements the hardware-level ESC/POS commands: printer
//! initialization, paper feed and cut, line spacing, cash drawer pulses,
//! and print density.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC 3 n`, `GS V m`, `GS | n`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for extended commands: cutting, barcodes, density.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Clears the print
/// buffer and resets text formatting, character size, alignment, and line
/// spacing. Should be called at the start of each print job.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED AND LINE SPACING
// ============================================================================

/// # Print and Line Feed (LF)
///
/// Prints the line buffer and feeds one line.
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// # Set Line Spacing to 24 Dots (ESC 3 24)
///
/// Sets the line spacing to exactly 24 dots, the height of one vertical
/// bit-image band. Used while printing raster graphics so consecutive
/// bands butt up against each other with no white gaps.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC 3 24 |
/// | Hex     | 1B 33 18 |
#[inline]
pub fn line_spacing_24() -> Vec<u8> {
    vec![ESC, b'3', 24]
}

/// # Restore Line Spacing to 30 Dots (ESC 3 30)
///
/// The default text line spacing. Issued after raster output to return
/// the printer to normal text layout.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC 3 30 |
/// | Hex     | 1B 33 1E |
#[inline]
pub fn line_spacing_30() -> Vec<u8> {
    vec![ESC, b'3', 30]
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// Paper cut modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutMode {
    /// Cut the paper completely
    #[default]
    Full = 0,
    /// Leave a small uncut hinge so the receipt does not fall
    Partial = 1,
}

/// # Cut Paper (GS V m)
///
/// Cuts the paper at the current position.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V m   |
/// | Hex     | 1D 56 m  |
///
/// ## Parameters
///
/// - `m = 0`: Full cut
/// - `m = 1`: Partial cut (leaves a hinge)
///
/// The cutter blade sits above the print head, so callers normally feed a
/// few lines first to avoid cutting through the last printed text; the
/// session layer feeds 6 lines before every cut.
pub fn cut(mode: CutMode) -> Vec<u8> {
    vec![GS, b'V', mode as u8]
}

/// Convenience function for a full cut
#[inline]
pub fn cut_full() -> Vec<u8> {
    cut(CutMode::Full)
}

/// Convenience function for a partial cut
#[inline]
pub fn cut_partial() -> Vec<u8> {
    cut(CutMode::Partial)
}

// ============================================================================
// CASH DRAWER
// ============================================================================

/// Cash drawer connector pins
///
/// Receipt printers expose an RJ11 "drawer kick" connector with two
/// controllable pins; most drawers are wired to pin 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerPin {
    /// Connector pin 2 (the common wiring)
    #[default]
    Pin2 = 0,
    /// Connector pin 5
    Pin5 = 1,
}

/// # Generate Cash Drawer Pulse (ESC p m)
///
/// Sends an electrical pulse to the drawer kick connector, opening a
/// connected cash drawer.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC p m  |
/// | Hex     | 1B 70 m  |
///
/// ## Parameters
///
/// - `m = 0`: Pulse on connector pin 2
/// - `m = 1`: Pulse on connector pin 5
pub fn cash_drawer(pin: DrawerPin) -> Vec<u8> {
    vec![ESC, b'p', pin as u8]
}

// ============================================================================
// PRINT DENSITY
// ============================================================================

/// Print density levels
///
/// Nine absolute heat levels from -50% to +50% relative to the factory
/// default. Higher density prints darker but slower and wears the head
/// faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    /// -50%
    Minus50 = 0,
    /// -37.5%
    Minus37 = 1,
    /// -25%
    Minus25 = 2,
    /// -12.5%
    Minus12 = 3,
    /// Factory default
    #[default]
    Normal = 4,
    /// +12.5%
    Plus12 = 5,
    /// +25%
    Plus25 = 6,
    /// +37.5%
    Plus37 = 7,
    /// +50%
    Plus50 = 8,
}

/// # Set Print Density (GS | n)
///
/// Selects one of nine absolute density levels.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS \| n  |
/// | Hex     | 1D 7C n  |
///
/// ## Parameters
///
/// - `n = 0..=8`: density from -50% (`0`) through default (`4`) to +50% (`8`)
pub fn density(level: Density) -> Vec<u8> {
    vec![GS, b'|', level as u8]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/POS uses little-endian encoding for all multi-byte integers.
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(300), [0x2C, 0x01]); // common image width
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
