//! # Sample Labels
//!
//! Pre-built labels that exercise the builder API end to end.
//!
//! The shipping label is the reference output for the crate: it is built
//! from four independent sections merged in order, and the same label can
//! be produced from a placeholder template.

use crate::field::{Barcode, BarcodeConfig, BoxColor};
use crate::label::Label;
use crate::protocol::barcode::Symbology;

// ============================================================================
// SHIPPING LABEL
// ============================================================================

const SENDER_ADDRESS: [&str; 3] = [
    "1000 Shipping Lane",
    "Shelbyville TN 38102",
    "United States (USA)",
];

const RECEIVER_ADDRESS: [&str; 4] = [
    "John Doe",
    "100 Main Street",
    "Springfield TN 39021",
    "United States (USA)",
];

const REFERENCES: [&str; 3] = ["Ctr. X34B-1", "REF1 F00B47", "REF2 BL4H8"];

/// Sender block: logo, company name and address.
fn sender_section() -> Label {
    Label::new()
        .set_font('0', 60)
        .draw_square((50, 50), 100)
        .draw_box_styled((75, 75), (100, 100, 100), BoxColor::Black, 0, true)
        .draw_square((93, 93), 40)
        .add_text("Intershipping, Inc.", (220, 50))
        .set_font('0', 30)
        .add_lines(SENDER_ADDRESS, (220, 115))
        .draw_box((50, 250), (700, 3, 3))
}

/// Receiver address and permit box.
fn receiver_section() -> Label {
    Label::new()
        .draw_box((600, 300), (150, 150, 3))
        .set_font('A', 30)
        .add_lines(RECEIVER_ADDRESS, (50, 300))
        .set_font('A', 15)
        .add_text("Permit", (638, 340))
        .add_text("123456", (638, 390))
        .draw_box((50, 500), (700, 3, 3))
}

/// Tracking barcode.
fn barcode_section() -> Label {
    Label::new().draw_barcode_configured(
        Barcode::new("12345678"),
        (100, 550),
        BarcodeConfig::new(5, 2.0, 270),
    )
}

/// Reference box and destination code.
fn reference_section() -> Label {
    Label::new()
        .draw_box((50, 900), (700, 250, 3))
        .set_font('0', 40)
        .add_texts(REFERENCES, (100, 960), (0, 50))
        .draw_box((400, 900), (3, 250, 3))
        .set_font('0', 190)
        .add_text("CA", (470, 955))
}

/// 4 × 6 in shipping label built from four merged sections.
pub fn shipping_label() -> Label {
    Label::new().merge_labels([
        sender_section(),
        receiver_section(),
        barcode_section(),
        reference_section(),
    ])
}

/// Shipping label skeleton with one placeholder per section.
///
/// Serializing it unfilled shows each placeholder as visible text.
pub fn shipping_template() -> Label {
    Label::new()
        .set_placeholder("sender")
        .set_placeholder("receiver")
        .set_placeholder("barcode")
        .set_placeholder("references")
}

/// [`shipping_template`] with every placeholder filled in.
pub fn filled_shipping_template() -> Label {
    let sections = [
        ("sender", sender_section()),
        ("receiver", receiver_section()),
        ("barcode", barcode_section()),
        ("references", reference_section()),
    ];
    sections
        .into_iter()
        .fold(shipping_template(), |label, (id, section)| {
            label.replace_placeholder(id, section.fields().to_vec())
        })
}

// ============================================================================
// BARCODE GALLERY
// ============================================================================

/// A few common symbologies stacked on one label.
pub fn barcode_gallery() -> Label {
    let rows: [(&str, Barcode); 4] = [
        ("Code 128", Barcode::new("ZEBRAKIT-128")),
        (
            "Code 39",
            Barcode::new("ZEBRAKIT").symbology(Symbology::Code39),
        ),
        (
            "EAN-13",
            Barcode::new("400638133393").symbology(Symbology::Ean13),
        ),
        (
            "UPC-A",
            Barcode::new("03600029145").symbology(Symbology::UpcA),
        ),
    ];

    rows.into_iter()
        .enumerate()
        .fold(
            Label::new()
                .add_comment("barcode gallery")
                .configure_barcode(2, 3.0, 100)
                .set_font('0', 30),
            |label, (i, (caption, barcode))| {
                let y = 40 + i as i32 * 260;
                label
                    .add_text(caption, (50, y))
                    .draw_barcode(barcode, (50, y + 40))
            },
        )
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// List available sample labels
pub fn list_labels() -> &'static [&'static str] {
    &["shipping", "shipping-template", "barcodes"]
}

/// Get a sample label by name
pub fn by_name(name: &str) -> Option<Label> {
    match name.to_lowercase().as_str() {
        "shipping" => Some(shipping_label()),
        "shipping-template" | "shipping_template" => Some(filled_shipping_template()),
        "barcodes" => Some(barcode_gallery()),
        _ => None,
    }
}
