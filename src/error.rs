//! # Error Types
//!
//! This module defines error types used throughout the zebrakit library.
//!
//! Building and serializing a label never fails: out-of-range numbers are
//! confined instead. Errors only appear at the edges, when a label is read
//! from JSON, checked against its physical size, or sent to a renderer.

use thiserror::Error;

/// Main error type for zebrakit operations
#[derive(Debug, Error)]
pub enum ZebraError {
    /// Requested render format is not one of the supported formats
    #[error("Invalid format '{0}': expected one of pdf, png")]
    InvalidFormat(String),

    /// Printhead resolution the render service does not know about
    #[error("Unsupported resolution: {0}")]
    UnsupportedResolution(u32),

    /// Label content reaches past the addressable printing area
    #[error(
        "The elements on the label exceed the bounds of the label. \
         Max used coordinate of elements: X={used_x}, Y={used_y}. \
         Max possible label coordinates: X={max_x}, Y={max_y}."
    )]
    BoundsExceeded {
        used_x: u32,
        used_y: u32,
        max_x: u32,
        max_y: u32,
    },

    /// No sample label with this name
    #[error("Unknown label '{0}'. Run `zebrakit list` to see available labels.")]
    UnknownLabel(String),

    /// Network-level failure talking to the render service
    #[error("Transport error: {0}")]
    Transport(String),

    /// Render service answered with a non-success status
    #[error("Render service returned HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// Malformed JSON label definition
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for zebrakit operations
pub type ZebraResult<T> = Result<T, ZebraError>;
