//! # Zebrakit - ZPL Label Builder
//!
//! Zebrakit is a Rust library for composing labels in the Zebra Programming
//! Language (ZPL). It provides:
//!
//! - **Fields**: text, font changes, boxes, barcodes, comments and placeholders
//! - **Labels**: fluent, value-semantics builders with section merging and
//!   placeholder templates
//! - **Bounds checking**: a pre-flight check against the physical label size
//! - **Rendering**: PDF/PNG previews through the Labelary HTTP API
//!
//! ## Quick Start
//!
//! ```no_run
//! use zebrakit::{
//!     field::Barcode,
//!     label::Label,
//!     render::{LabelaryClient, OutputFormat},
//! };
//!
//! # async fn demo() -> Result<(), zebrakit::ZebraError> {
//! let label = Label::new()
//!     .set_font('0', 60)
//!     .add_text("Intershipping, Inc.", (220, 50))
//!     .draw_box((50, 250), (700, 3, 3))
//!     .draw_barcode(Barcode::new("12345678"), (100, 550));
//!
//! // Markup, one fragment per line
//! println!("{}", label.serialize(true, true));
//!
//! // Rendered preview
//! let client = LabelaryClient::new()?;
//! let png = label.render_with(&client, OutputFormat::Png, true).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ZPL command vocabulary |
//! | [`field`] | Field kinds and their encoding |
//! | [`label`] | Label builder and serialization |
//! | [`layout`] | Content extent and bounds check |
//! | [`printer`] | Resolution, size and quality |
//! | [`render`] | Render dispatch and the Labelary client |
//! | [`sample`] | Pre-built sample labels |
//! | [`error`] | Error types |
//!
//! ## Coordinates
//!
//! All positions and sizes are in printer dots. Every numeric value is
//! confined into the range the printer accepts when it is set, so building
//! and serializing a label never fails.

pub mod confine;
pub mod error;
pub mod field;
pub mod label;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod sample;

// Re-exports for convenience
pub use error::ZebraError;
pub use field::Field;
pub use label::Label;
pub use printer::LabelConfig;
