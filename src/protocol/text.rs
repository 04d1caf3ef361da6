//! # ESC/POS Text Styling Commands
//!
//! This module implements text formatting commands: alignment, fonts,
//! character size, the bold/underline style pairs, and international code
//! page selection.
//!
//! ## Absolute Style State
//!
//! ESC/POS style commands overwrite printer state; nothing here merges with
//! or reads back what the printer currently has. The [`text_type`] builder
//! deliberately emits **both** the bold and the underline command on every
//! call, so each call fully determines the combined style:
//!
//! ```text
//! text_type(Bold)       →  bold ON,  underline OFF
//! text_type(Underline)  →  bold OFF, underline 1-dot
//! ```
//!
//! Calling "bold" therefore clears underline and vice versa; use the
//! explicit combined variants to set both.

use super::commands::ESC;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC a n)
///
/// Sets the alignment for subsequent lines.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available character fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12×24 dots (the wider default font)
    #[default]
    A = 0,
    /// Font B: 9×17 dots (compact)
    B = 1,
}

/// # Select Font (ESC M n)
///
/// Selects the character font for subsequent text.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character size modes (ESC ! n)
///
/// The mode byte scales the base font: bit 4 doubles the height, bit 5
/// doubles the width, both together print quad-area characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    /// Normal 1×1 characters
    #[default]
    Normal,
    /// Double height (1×2)
    DoubleHeight,
    /// Double width (2×1)
    DoubleWidth,
    /// Quad area (2×2)
    Quad,
}

/// # Set Character Size (ESC ! n)
///
/// Selects the print mode for subsequent text. A reset to normal mode
/// (`ESC ! 0`) is always emitted first so the size command never
/// inherits stale mode bits; scaled sizes then follow with their mode
/// byte.
///
/// | Mode          | Bytes                |
/// |---------------|----------------------|
/// | Normal        | 1B 21 00             |
/// | Double height | 1B 21 00, 1B 21 10   |
/// | Double width  | 1B 21 00, 1B 21 20   |
/// | Quad          | 1B 21 00, 1B 21 30   |
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{size, TextSize};
///
/// assert_eq!(size(TextSize::Quad), vec![0x1B, 0x21, 0x00, 0x1B, 0x21, 0x30]);
/// assert_eq!(size(TextSize::Normal), vec![0x1B, 0x21, 0x00]);
/// ```
pub fn size(s: TextSize) -> Vec<u8> {
    let mut cmd = vec![ESC, b'!', 0x00];
    let mode = match s {
        TextSize::Normal => return cmd,
        TextSize::DoubleHeight => 0x10,
        TextSize::DoubleWidth => 0x20,
        TextSize::Quad => 0x30,
    };
    cmd.extend([ESC, b'!', mode]);
    cmd
}

// ============================================================================
// TEXT TYPE (BOLD + UNDERLINE)
// ============================================================================

/// Combined bold/underline text styles
///
/// Bold and underline are independent printer flags, but every variant
/// here sets **both** so style calls stay absolute (see module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextType {
    /// Bold off, underline off
    #[default]
    Normal,
    /// Bold on, underline off
    Bold,
    /// Bold off, 1-dot underline
    Underline,
    /// Bold off, 2-dot underline
    Underline2,
    /// Bold on, 1-dot underline
    BoldUnderline,
    /// Bold on, 2-dot underline
    BoldUnderline2,
}

impl TextType {
    /// The bold flag this style carries
    #[inline]
    pub fn bold(self) -> bool {
        matches!(
            self,
            TextType::Bold | TextType::BoldUnderline | TextType::BoldUnderline2
        )
    }

    /// The underline thickness this style carries (0, 1 or 2 dots)
    #[inline]
    pub fn underline_dots(self) -> u8 {
        match self {
            TextType::Normal | TextType::Bold => 0,
            TextType::Underline | TextType::BoldUnderline => 1,
            TextType::Underline2 | TextType::BoldUnderline2 => 2,
        }
    }
}

/// # Set Text Type (ESC E n, ESC - n)
///
/// Emits the bold command followed by the underline command, fully
/// determining both flags.
///
/// | Command   | Bytes   |
/// |-----------|---------|
/// | Bold      | 1B 45 n (n = 0/1)     |
/// | Underline | 1B 2D n (n = 0/1/2)   |
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{text_type, TextType};
///
/// // Bold alone clears underline
/// assert_eq!(
///     text_type(TextType::Bold),
///     vec![0x1B, 0x45, 0x01, 0x1B, 0x2D, 0x00]
/// );
/// // Underline alone clears bold
/// assert_eq!(
///     text_type(TextType::Underline),
///     vec![0x1B, 0x45, 0x00, 0x1B, 0x2D, 0x01]
/// );
/// ```
pub fn text_type(t: TextType) -> Vec<u8> {
    vec![
        ESC,
        b'E',
        t.bold() as u8,
        ESC,
        b'-',
        t.underline_dots(),
    ]
}

// ============================================================================
// CODE PAGE SELECTION
// ============================================================================

/// International character code pages (ESC t n)
///
/// The page id is the raw `n` parameter the firmware expects; the gaps in
/// the numbering (0x09–0x0F, 0x11) are reserved by the firmware for
/// Kanji/Hiragana tables this driver does not select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CodePage {
    /// PC437: USA, standard Europe
    Usa = 0x00,
    /// JIS: Japanese Katakana
    Jis = 0x01,
    /// PC850: Multilingual
    Multilingual = 0x02,
    /// PC860: Portuguese
    Portuguese = 0x03,
    /// PC863: Canadian French
    CanadianFrench = 0x04,
    /// PC865: Nordic (the fallback page)
    #[default]
    Nordic = 0x05,
    /// Western Europe
    WestEurope = 0x06,
    /// Greek
    Greek = 0x07,
    /// Hebrew
    Hebrew = 0x08,
    /// WPC1252: Western European Windows code set
    Windows1252 = 0x10,
    /// PC866: Cyrillic #2
    Cyrillic2 = 0x12,
    /// PC852: Latin 2
    Latin2 = 0x13,
    /// PC858: Euro
    Euro = 0x14,
    /// Thai character code 42
    Thai42 = 0x15,
    /// Thai character code 11
    Thai11 = 0x16,
    /// Thai character code 13
    Thai13 = 0x17,
    /// Thai character code 14
    Thai14 = 0x18,
    /// Thai character code 16
    Thai16 = 0x19,
    /// Thai character code 17
    Thai17 = 0x1A,
    /// Thai character code 18
    Thai18 = 0x1B,
}

impl CodePage {
    /// Look up a code page by its conventional name.
    ///
    /// Unrecognized names fall back to [`CodePage::Nordic`]. This is an
    /// intentional default-selection policy, not an error path: callers
    /// passing configuration strings through always get a printable page.
    ///
    /// ```
    /// use recibo::protocol::text::CodePage;
    ///
    /// assert_eq!(CodePage::from_name("GREEK"), CodePage::Greek);
    /// assert_eq!(CodePage::from_name("KLINGON"), CodePage::Nordic);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "USA" => CodePage::Usa,
            "JIS" => CodePage::Jis,
            "MULTILINGUAL" => CodePage::Multilingual,
            "PORTUGUESE" => CodePage::Portuguese,
            "CA_FRENCH" => CodePage::CanadianFrench,
            "NORDIC" => CodePage::Nordic,
            "WEST_EUROPE" => CodePage::WestEurope,
            "GREEK" => CodePage::Greek,
            "HEBREW" => CodePage::Hebrew,
            "WPC1252" => CodePage::Windows1252,
            "CIRILLIC2" | "CYRILLIC2" => CodePage::Cyrillic2,
            "LATIN2" => CodePage::Latin2,
            "EURO" => CodePage::Euro,
            "THAI42" => CodePage::Thai42,
            "THAI11" => CodePage::Thai11,
            "THAI13" => CodePage::Thai13,
            "THAI14" => CodePage::Thai14,
            "THAI16" => CodePage::Thai16,
            "THAI17" => CodePage::Thai17,
            "THAI18" => CodePage::Thai18,
            _ => CodePage::Nordic,
        }
    }
}

/// # Select Character Code Table (ESC t n)
///
/// Selects which glyph table the upper half (0x80–0xFF) of subsequent
/// text bytes indexes into.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC t n |
/// | Hex     | 1B 74 n |
pub fn codepage(page: CodePage) -> Vec<u8> {
    vec![ESC, b't', page as u8]
}

// ============================================================================
// TESTS
// ============================================================================
