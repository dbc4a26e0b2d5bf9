//! # Printer Module
//!
//! This module describes the physical label a format targets.
//!
//! ## Modules
//!
//! - [`config`]: Resolution, size, quality and unit conversion

pub mod config;

pub use config::{LabelConfig, LabelSize, Quality, Resolution, max_dots, mm_to_next_inch};
