//! # Session Tests
//!
//! End-to-end tests driving a full printer session against the mock
//! transport and asserting the emitted byte stream. Unit tests inside the
//! crate cover each command builder in isolation; these cover the
//! sequencing a real receipt goes through.

use pretty_assertions::assert_eq;

use image::{GrayImage, Luma};
use recibo::protocol::barcode::{BarcodeSpec, HriFont, HriPosition, Symbology};
use recibo::protocol::commands::{CutMode, Density, DrawerPin};
use recibo::protocol::text::{Alignment, CodePage, Font, TextSize, TextType};
use recibo::transport::MockTransport;
use recibo::{Printer, ReciboError};

fn open_printer() -> Printer<MockTransport> {
    let mut printer = Printer::new(MockTransport::new());
    printer.open_default().unwrap();
    printer
}

// ============================================================================
// RECEIPT SEQUENCING
// ============================================================================

#[test]
fn full_receipt_byte_stream() {
    let mut printer = open_printer();

    printer.init().unwrap();
    printer.set_align(Alignment::Center).unwrap();
    printer.set_text_type(TextType::Bold).unwrap();
    printer.print_ln("RECIBO MART").unwrap();
    printer.set_text_type(TextType::Normal).unwrap();
    printer.set_align(Alignment::Left).unwrap();
    printer.print_ln("1x Coffee            2.50").unwrap();
    printer.cut(CutMode::Partial).unwrap();

    let mut expected: Vec<u8> = Vec::new();
    expected.extend([0x1B, 0x40]); // init
    expected.extend([0x1B, 0x61, 0x01]); // center
    expected.extend([0x1B, 0x45, 0x01, 0x1B, 0x2D, 0x00]); // bold
    expected.extend(b"RECIBO MART");
    expected.push(0x0A);
    expected.extend([0x1B, 0x45, 0x00, 0x1B, 0x2D, 0x00]); // normal
    expected.extend([0x1B, 0x61, 0x00]); // left
    expected.extend(b"1x Coffee            2.50");
    expected.push(0x0A);
    expected.extend([0x0A; 6]); // feed clear of the blade
    expected.extend([0x1D, 0x56, 0x01]); // partial cut

    assert_eq!(printer.transport().written(), &expected[..]);
}

#[test]
fn print_then_print_ln_stream() {
    let mut printer = open_printer();
    printer.print("A").unwrap();
    printer.print_ln("B").unwrap();
    assert_eq!(printer.transport().written(), b"AB\n");
}

#[test]
fn style_setters_are_absolute_not_merged() {
    let mut printer = open_printer();
    printer.set_text_type(TextType::Bold).unwrap();
    let after_bold = printer.transport().written().to_vec();
    printer.set_text_type(TextType::Underline).unwrap();

    assert_eq!(after_bold, vec![0x1B, 0x45, 0x01, 0x1B, 0x2D, 0x00]);
    assert_eq!(
        &printer.transport().written()[after_bold.len()..],
        &[0x1B, 0x45, 0x00, 0x1B, 0x2D, 0x01]
    );
}

#[test]
fn every_setter_is_a_fixed_sequence() {
    // One session setting everything once; nothing depends on call order.
    let mut printer = open_printer();
    printer.set_text_size(TextSize::Quad).unwrap();
    printer.set_text_font(Font::B).unwrap();
    printer.set_density(Density::Plus25).unwrap();
    printer.set_code_page(CodePage::Greek).unwrap();

    let mut expected: Vec<u8> = Vec::new();
    expected.extend([0x1B, 0x21, 0x00, 0x1B, 0x21, 0x30]);
    expected.extend([0x1B, 0x4D, 0x01]);
    expected.extend([0x1D, 0x7C, 0x06]);
    expected.extend([0x1B, 0x74, 0x07]);
    assert_eq!(printer.transport().written(), &expected[..]);
}

#[test]
fn cash_drawer_and_cut_modes() {
    let mut printer = open_printer();
    printer.open_cash_drawer(DrawerPin::Pin2).unwrap();
    printer.cut(CutMode::Full).unwrap();

    let written = printer.transport().written();
    assert_eq!(&written[..3], &[0x1B, 0x70, 0x00]);
    assert_eq!(&written[written.len() - 3..], &[0x1D, 0x56, 0x00]);
}

// ============================================================================
// BARCODES
// ============================================================================

#[test]
fn barcode_dimension_ranges_are_inclusive() {
    let ok = |width: u16, height: u16| {
        BarcodeSpec {
            width,
            height,
            ..Default::default()
        }
        .encode(b"4006381333931")
        .is_ok()
    };

    // Boundaries and a sample inside the range succeed
    assert!(ok(1, 2));
    assert!(ok(1, 255));
    assert!(ok(255, 2));
    assert!(ok(255, 255));
    assert!(ok(3, 100));

    // One past each boundary fails
    assert!(!ok(0, 100));
    assert!(!ok(256, 100));
    assert!(!ok(3, 1));
    assert!(!ok(3, 256));
}

#[test]
fn unknown_symbology_matches_explicit_ean13() {
    let mut unknown = open_printer();
    let mut explicit = open_printer();

    let spec_for = |name: &str| BarcodeSpec {
        symbology: Symbology::from_name(name),
        width: 3,
        height: 100,
        hri_position: HriPosition::Below,
        hri_font: HriFont::A,
    };

    unknown
        .print_barcode("4006381333931", &spec_for("DATAMATRIX"))
        .unwrap();
    explicit
        .print_barcode("4006381333931", &spec_for("EAN13"))
        .unwrap();

    assert_eq!(
        unknown.transport().written(),
        explicit.transport().written()
    );
}

#[test]
fn failed_barcode_leaves_stream_untouched() {
    let mut printer = open_printer();
    printer.print_ln("before").unwrap();
    let before = printer.transport().written().to_vec();

    let err = printer
        .print_barcode("", &BarcodeSpec::default())
        .unwrap_err();
    assert!(matches!(err, ReciboError::InvalidBarcodeData(_)));
    assert_eq!(printer.transport().written(), &before[..]);
}

// ============================================================================
// RASTER IMAGES
// ============================================================================

#[test]
fn band_count_follows_image_height() {
    for (height, expected_bands) in [(0u32, 0usize), (1, 1), (24, 1), (25, 2), (72, 3), (73, 4)] {
        let mut printer = open_printer();
        let img = GrayImage::from_pixel(8, height, Luma([255u8]));
        printer.print_bitmap(&img).unwrap();

        let bands = printer
            .transport()
            .written()
            .windows(3)
            .filter(|w| *w == [0x1B, 0x2A, 33])
            .count();
        assert_eq!(bands, expected_bands, "height {}", height);
    }
}

#[test]
fn checkerboard_band_payload() {
    // 2x24 checkerboard: column 0 starts black, column 1 starts white
    let mut img = GrayImage::new(2, 24);
    for y in 0..24 {
        for x in 0..2 {
            let v = if (x + y) % 2 == 0 { 0u8 } else { 255u8 };
            img.put_pixel(x, y, Luma([v]));
        }
    }

    let mut printer = open_printer();
    printer.print_bitmap(&img).unwrap();

    let written = printer.transport().written();
    // Header: spacing, mode, count(2) → payload starts at offset 8
    assert_eq!(&written[8..11], &[0xAA, 0xAA, 0xAA]); // rows 0,2,4,... black
    assert_eq!(&written[11..14], &[0x55, 0x55, 0x55]); // rows 1,3,5,... black
}

#[test]
fn wide_image_column_count_is_little_endian() {
    let mut printer = open_printer();
    let img = GrayImage::from_pixel(300, 24, Luma([255u8]));
    printer.print_bitmap(&img).unwrap();
    assert_eq!(&printer.transport().written()[6..8], &[0x2C, 0x01]);
}

#[test]
fn raster_output_restores_text_spacing() {
    let mut printer = open_printer();
    let img = GrayImage::from_pixel(4, 50, Luma([0u8]));
    printer.print_bitmap(&img).unwrap();

    let written = printer.transport().written();
    assert_eq!(&written[written.len() - 3..], &[0x1B, 0x33, 30]);
    // Trailing feed sits right before the restore
    assert_eq!(written[written.len() - 4], 0x0A);
}

// ============================================================================
// QR CODES
// ============================================================================

#[test]
fn qr_code_flows_through_raster_pipeline() {
    let mut printer = open_printer();
    printer.print_qr("https://example.com/receipt/42").unwrap();

    let written = printer.transport().written();
    assert!(!written.is_empty());
    assert_eq!(&written[..3], &[0x1B, 0x33, 24]);
    assert_eq!(&written[written.len() - 3..], &[0x1B, 0x33, 30]);

    // The default 150px request spans several 24-row bands
    let bands = written.windows(3).filter(|w| *w == [0x1B, 0x2A, 33]).count();
    assert!(bands >= 6, "expected at least 6 bands, got {}", bands);
}

#[test]
fn qr_generation_failure_writes_nothing() {
    let mut printer = open_printer();
    // 8 KiB exceeds the capacity of every QR version
    let oversized = "x".repeat(8192);
    let err = printer.print_qr(&oversized).unwrap_err();
    assert!(matches!(err, ReciboError::QrGeneration(_)));
    assert!(printer.transport().written().is_empty());
}

// ============================================================================
// FAILURE SEMANTICS
// ============================================================================

#[test]
fn transport_failure_aborts_mid_sequence() {
    let mut printer = open_printer();
    printer.print_ln("paid").unwrap();

    // Arm the transport to reject the next write: the cut never lands,
    // but the bytes already sent stay sent.
    let sent_so_far = printer.transport().written().to_vec();
    {
        // Direct access to arm the failure
        let mut inner = printer.into_transport();
        inner.fail_after(0);
        printer = Printer::new(inner);
    }
    let err = printer.cut(CutMode::Full).unwrap_err();
    assert!(matches!(err, ReciboError::Transport(_)));
    assert_eq!(printer.transport().written(), &sent_so_far[..]);
}

#[test]
fn cp437_strict_encoding() {
    let mut printer = open_printer();
    printer.set_code_page(CodePage::Usa).unwrap();
    printer.print_cp437("Año: 2026 ░▒▓").unwrap();

    let written = printer.transport().written();
    assert_eq!(&written[..3], &[0x1B, 0x74, 0x00]);
    assert_eq!(written[4], 0xA4); // ñ

    // Outside CP437 → error, stream unchanged
    let before = written.len();
    assert!(printer.print_cp437("☃").is_err());
    assert_eq!(printer.transport().written().len(), before);
}
