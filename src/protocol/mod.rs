//! # ZPL Protocol Implementation
//!
//! Low-level vocabulary for the ZPL II label language used by Zebra
//! thermal label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Command mnemonics and the shared parameter encoding
//!   helpers (comma segments, field origin, field wrapping)
//! - [`barcode`]: Symbology codes, orientations and Code 128 modes
//!
//! ## Usage Example
//!
//! ```
//! use zebrakit::protocol::commands;
//!
//! let mut zpl = String::new();
//! zpl.push_str(commands::START_FORMAT);
//! zpl.push_str(&commands::encapsulate(
//!     &commands::field_origin(50, 50, 0),
//!     false,
//!     "^FDHello",
//! ));
//! zpl.push_str(commands::END_FORMAT);
//!
//! assert_eq!(zpl, "^XA^FO50,50,0^FDHello^FS^XZ");
//! ```

pub mod barcode;
pub mod commands;
