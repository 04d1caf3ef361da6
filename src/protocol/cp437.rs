//! # Code Page 437 Encoding
//!
//! Converts Unicode strings to CP437 single-byte encoding.
//!
//! The printer must have Code Page 437 selected (`ESC t 0`) for these
//! bytes to render correctly. ASCII (U+0000–U+007F) passes through
//! unchanged; the upper half indexes the table below. Characters with no
//! CP437 representation are an encoding error. This encoder never
//! substitutes replacement characters: a receipt silently printing `?`
//! in an address or a price line is worse than failing the call.

use crate::error::ReciboError;

/// CP437 upper half: the Unicode code point for each byte 0x80–0xFF.
///
/// Reference: IBM Code Page 437 character set.
const CP437_HIGH: [char; 128] = [
    // 0x80–0x8F: accented uppercase/lowercase
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90–0x9F: more accented, currency, ƒ
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0–0xAF: Spanish, fractions, punctuation
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0–0xBF: shade blocks and box drawing
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0–0xCF
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0–0xDF: box drawing, block elements
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0–0xEF: Greek letters and math
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0–0xFF: math symbols, degree, etc.
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■',
    '\u{00A0}',
];

/// Encode a Unicode string as CP437 bytes.
///
/// - ASCII (U+0000–U+007F): passed through as-is
/// - CP437 upper half (128 mapped code points): single byte 0x80–0xFF
/// - Unmapped characters: [`ReciboError::Encoding`]
///
/// ## Example
///
/// ```
/// use recibo::protocol::cp437;
///
/// assert_eq!(cp437::encode("Año").unwrap(), vec![0x41, 0xA4, 0x6F]);
/// assert!(cp437::encode("★").is_err());
/// ```
pub fn encode(s: &str) -> Result<Vec<u8>, ReciboError> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if (ch as u32) < 0x80 {
            out.push(ch as u8);
        } else if let Some(pos) = CP437_HIGH.iter().position(|&c| c == ch) {
            out.push(0x80 + pos as u8);
        } else {
            return Err(ReciboError::Encoding(format!(
                "character '{}' (U+{:04X}) has no CP437 representation",
                ch, ch as u32
            )));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("Hello, world!").unwrap(), b"Hello, world!");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode("").unwrap(), b"");
    }

    #[test]
    fn test_accented_latin() {
        assert_eq!(encode("ñ").unwrap(), vec![0xA4]);
        assert_eq!(encode("Ñ").unwrap(), vec![0xA5]);
        assert_eq!(encode("é").unwrap(), vec![0x82]);
        assert_eq!(encode("ü").unwrap(), vec![0x81]);
    }

    #[test]
    fn test_spanish_text() {
        // "¿Qué?" → ¿=0xA8, Q=0x51, u=0x75, é=0x82, ?=0x3F
        assert_eq!(encode("¿Qué?").unwrap(), vec![0xA8, 0x51, 0x75, 0x82, 0x3F]);
    }

    #[test]
    fn test_box_drawing() {
        assert_eq!(encode("┌──┐").unwrap(), vec![0xDA, 0xC4, 0xC4, 0xBF]);
        assert_eq!(encode("╔═╗").unwrap(), vec![0xC9, 0xCD, 0xBB]);
    }

    #[test]
    fn test_block_elements_and_math() {
        assert_eq!(encode("█").unwrap(), vec![0xDB]);
        assert_eq!(encode("°±²").unwrap(), vec![0xF8, 0xF1, 0xFD]);
    }

    #[test]
    fn test_table_edges() {
        assert_eq!(encode("Ç").unwrap(), vec![0x80]);
        assert_eq!(encode("\u{00A0}").unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_unmapped_char_is_error() {
        let err = encode("★").unwrap_err();
        assert!(matches!(err, ReciboError::Encoding(_)));
    }

    #[test]
    fn test_error_names_offending_char() {
        let err = encode("ok €").unwrap_err();
        assert!(err.to_string().contains("20AC"));
    }
}
