//! # ZPL Commands
//!
//! This module holds the ZPL II command vocabulary used by Zebra thermal
//! label printers, plus the small string helpers every field encoder shares.
//!
//! ## Protocol Overview
//!
//! ZPL is a text protocol. Every command starts with a caret (`^`) and a
//! two-letter mnemonic, followed by comma separated parameters:
//!
//! ```text
//! ^XA                         start of label format
//! ^FO50,50,0^GB100,100,3^FS   field origin + graphic box + field separator
//! ^XZ                         end of label format
//! ```
//!
//! Parameters are **positional**. An omitted parameter in the middle of a
//! list is written as an empty segment (`^BCN,,Y,N`), never dropped, so the
//! comma count of a command is part of the wire format.
//!
//! ## State
//!
//! Some commands (`^CF`, `^BY`) change printer state that applies to every
//! field after them in the stream. Field order is therefore significant.
//!
//! ## Reference
//!
//! Based on the "ZPL II Programming Guide" by Zebra Technologies.

use std::fmt::Display;

// ============================================================================
// FORMAT COMMANDS
// ============================================================================

/// # Start Format (^XA)
///
/// Opens a label format. Everything up to the matching `^XZ` belongs to one
/// label.
pub const START_FORMAT: &str = "^XA";

/// # End Format (^XZ)
///
/// Closes the label format opened by `^XA` and prints it.
pub const END_FORMAT: &str = "^XZ";

// ============================================================================
// FIELD COMMANDS
// ============================================================================

/// # Field Origin (^FO)
///
/// Sets the upper-left corner of the next field.
///
/// | Parameter | Range | Meaning |
/// |-----------|-------|---------|
/// | x | 0–32000 | dots from the left edge |
/// | y | 0–32000 | dots from the top edge |
/// | z | 0–2 | justification: 0 left, 1 right, 2 auto |
pub const FIELD_ORIGIN: &str = "^FO";

/// # Field Reverse Print (^FR)
///
/// Inverts the field's colors where it overlaps other printed areas.
/// Must appear between `^FO` and the field payload.
pub const FIELD_REVERSE: &str = "^FR";

/// # Field Separator (^FS)
///
/// Terminates the current field.
pub const FIELD_SEPARATOR: &str = "^FS";

/// # Field Data (^FD)
///
/// Starts the data string of a text or barcode field. The data runs until
/// the next `^FS`.
pub const FIELD_DATA: &str = "^FD";

/// # Comment (^FX)
///
/// Non-printing comment. Everything up to the next caret is ignored by the
/// printer.
pub const COMMENT: &str = "^FX";

// ============================================================================
// FONT AND GRAPHICS COMMANDS
// ============================================================================

/// # Change Default Font (^CF)
///
/// `^CFf,h,w` selects font `f` with character height `h` and width `w` for
/// all following text fields.
pub const CHANGE_FONT: &str = "^CF";

/// # Graphic Box (^GB)
///
/// `^GBw,h,t,c,r` draws a box `w` × `h` dots with border thickness `t`,
/// line color `c` (`B` black, `W` white) and corner rounding `r` (0–8).
pub const GRAPHIC_BOX: &str = "^GB";

// ============================================================================
// BARCODE COMMANDS
// ============================================================================

/// # Barcode Field Default (^BY)
///
/// `^BYw,r,h` sets module width `w` (1–10 on most printers), wide to narrow
/// bar ratio `r` and default bar height `h` for all following barcodes.
pub const BARCODE_DEFAULTS: &str = "^BY";

/// # Barcode (^B)
///
/// Prefix of every barcode command. The symbology code follows directly,
/// e.g. `^BC` for Code 128 or `^B3` for Code 39.
pub const BARCODE: &str = "^B";

// ============================================================================
// ENCODING HELPERS
// ============================================================================

/// Render one positional parameter, including its leading comma.
///
/// `None` renders as a bare comma so that the parameters after it keep
/// their position.
///
/// ```
/// use zebrakit::protocol::commands::segment;
///
/// assert_eq!(segment(Some(30)), ",30");
/// assert_eq!(segment(None::<u32>), ",");
/// ```
#[inline]
pub fn segment<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => format!(",{}", v),
        None => ",".to_string(),
    }
}

/// ZPL yes/no parameter.
#[inline]
pub fn yes_no(flag: bool) -> char {
    if flag { 'Y' } else { 'N' }
}

/// Build a field origin command: `^FOx,y,z`.
///
/// ```
/// use zebrakit::protocol::commands::field_origin;
///
/// assert_eq!(field_origin(50, 120, 0), "^FO50,120,0");
/// ```
pub fn field_origin(x: i32, y: i32, alignment: i32) -> String {
    format!("{}{}{}{}", FIELD_ORIGIN, x, segment(Some(y)), segment(Some(alignment)))
}

/// Wrap a field payload between its origin and the field separator.
///
/// When `reverse` is set, `^FR` goes right after the origin and before the
/// payload.
///
/// ```
/// use zebrakit::protocol::commands::encapsulate;
///
/// assert_eq!(encapsulate("^FO1,2,0", false, "^FDhi"), "^FO1,2,0^FDhi^FS");
/// assert_eq!(encapsulate("^FO1,2,0", true, "^FDhi"), "^FO1,2,0^FR^FDhi^FS");
/// ```
pub fn encapsulate(origin: &str, reverse: bool, payload: &str) -> String {
    let mut out = String::with_capacity(origin.len() + payload.len() + 6);
    out.push_str(origin);
    if reverse {
        out.push_str(FIELD_REVERSE);
    }
    out.push_str(payload);
    out.push_str(FIELD_SEPARATOR);
    out
}
