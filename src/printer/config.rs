//! # Label Configuration
//!
//! Physical properties of the label a format is printed on.
//!
//! ## Resolutions
//!
//! | Class | Dots/mm | Printhead DPI |
//! |-------|---------|---------------|
//! | `Dpmm6` | 6 | 150/152 |
//! | `Dpmm8` | 8 | 203 (default) |
//! | `Dpmm12` | 12 | 300 |
//! | `Dpmm24` | 24 | 600 |
//!
//! ## Usage
//!
//! ```
//! use zebrakit::printer::{LabelConfig, LabelSize, Resolution, max_dots};
//!
//! let config = LabelConfig::SHIPPING_4X6;
//! assert_eq!(max_dots(config.size, config.resolution), (812, 1219));
//!
//! // 100 × 150 mm rounds up to 4 × 6 in
//! assert_eq!(LabelSize::metric(100.0, 150.0), LabelSize::inches(4, 6));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ZebraError;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

// ============================================================================
// RESOLUTION
// ============================================================================

/// Printhead resolution class, in dots per millimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Resolution {
    Dpmm6,
    #[default]
    Dpmm8,
    Dpmm12,
    Dpmm24,
}

impl Resolution {
    /// Dots per millimeter.
    pub fn dots_per_mm(self) -> u32 {
        match self {
            Resolution::Dpmm6 => 6,
            Resolution::Dpmm8 => 8,
            Resolution::Dpmm12 => 12,
            Resolution::Dpmm24 => 24,
        }
    }

    /// Look up a class by dots per millimeter.
    pub fn from_dpmm(dpmm: u32) -> Result<Self, ZebraError> {
        match dpmm {
            6 => Ok(Resolution::Dpmm6),
            8 => Ok(Resolution::Dpmm8),
            12 => Ok(Resolution::Dpmm12),
            24 => Ok(Resolution::Dpmm24),
            other => Err(ZebraError::UnsupportedResolution(other)),
        }
    }

    /// Look up a class by nominal printhead DPI.
    pub fn from_dpi(dpi: u32) -> Result<Self, ZebraError> {
        match dpi {
            150 | 152 => Ok(Resolution::Dpmm6),
            203 => Ok(Resolution::Dpmm8),
            300 => Ok(Resolution::Dpmm12),
            600 => Ok(Resolution::Dpmm24),
            other => Err(ZebraError::UnsupportedResolution(other)),
        }
    }
}

impl TryFrom<u32> for Resolution {
    type Error = ZebraError;

    fn try_from(dpmm: u32) -> Result<Self, Self::Error> {
        Resolution::from_dpmm(dpmm)
    }
}

impl From<Resolution> for u32 {
    fn from(resolution: Resolution) -> Self {
        resolution.dots_per_mm()
    }
}

// ============================================================================
// QUALITY
// ============================================================================

/// Print quality. Carried as label metadata; it is not part of the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "B")]
    Bitonal,
    #[default]
    #[serde(rename = "G")]
    Grayscale,
}

impl Quality {
    pub fn code(self) -> char {
        match self {
            Quality::Bitonal => 'B',
            Quality::Grayscale => 'G',
        }
    }
}

// ============================================================================
// SIZE
// ============================================================================

/// Round a millimeter length up to the next whole inch.
///
/// Computes `floor(mm / 25.4) + 1`, so an exact multiple of an inch still
/// moves to the next inch: 25.4 mm gives 2, while 25 mm gives 1.
///
/// ```
/// use zebrakit::printer::mm_to_next_inch;
///
/// assert_eq!(mm_to_next_inch(25.4), 2);
/// assert_eq!(mm_to_next_inch(100.0), 4);
/// ```
pub fn mm_to_next_inch(mm: f64) -> u32 {
    let inches = mm / MM_PER_INCH;
    (inches - inches % 1.0 + 1.0).max(0.0) as u32
}

/// Label dimensions in whole inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelSize {
    pub width: u32,
    pub height: u32,
}

impl LabelSize {
    pub const fn inches(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert millimeter dimensions with [`mm_to_next_inch`].
    pub fn metric(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width: mm_to_next_inch(width_mm),
            height: mm_to_next_inch(height_mm),
        }
    }
}

impl Default for LabelSize {
    fn default() -> Self {
        Self::inches(4, 6)
    }
}

/// Addressable dots per axis: `trunc(inches × 25.4 × dpmm)`.
pub fn max_dots(size: LabelSize, resolution: Resolution) -> (u32, u32) {
    let dpmm = resolution.dots_per_mm() as f64;
    let axis = |inches: u32| (inches as f64 * MM_PER_INCH * dpmm) as u32;
    (axis(size.width), axis(size.height))
}

// ============================================================================
// LABEL CONFIG
// ============================================================================

/// # Label Configuration
///
/// Everything about a label that is not content.
///
/// - **resolution**: printhead resolution class
/// - **size**: physical size in inches
/// - **quality**: print quality flag
/// - **padding**: inner padding in inches (metadata)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub size: LabelSize,
    #[serde(default)]
    pub quality: Quality,
    #[serde(default)]
    pub padding: u32,
}

impl LabelConfig {
    /// # 4 × 6 in Shipping Label
    ///
    /// The standard parcel label on a 203 DPI printer.
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Size | 4 × 6 in (101.6 × 152.4 mm) |
    /// | Resolution | 8 dpmm (203 DPI) |
    /// | Addressable | 812 × 1219 dots |
    /// | Quality | Grayscale |
    pub const SHIPPING_4X6: Self = Self {
        resolution: Resolution::Dpmm8,
        size: LabelSize::inches(4, 6),
        quality: Quality::Grayscale,
        padding: 0,
    };

    /// Addressable dots for this configuration.
    pub fn max_dots(&self) -> (u32, u32) {
        max_dots(self.size, self.resolution)
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::SHIPPING_4X6
    }
}

// ============================================================================
// TESTS
// ============================================================================
