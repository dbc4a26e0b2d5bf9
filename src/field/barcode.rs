//! Barcode fields: `^B` symbols and `^BY` defaults.
//!
//! ## Barcode
//!
//! ```text
//! ^FO100,550,0^BCN,,Y,N,N,N^FD12345678^FS
//!              │ │ │ │ │ │ └ mode
//!              │ │ │ │ │ └── check digit
//!              │ │ │ │ └──── line above
//!              │ │ │ └────── interpretation line
//!              │ │ └──────── bar height (empty: use ^BY height)
//!              │ └────────── orientation
//!              └──────────── symbology
//! ```
//!
//! Unset options render as empty segments. The five commas are always
//! present so every later parameter keeps its position.
//!
//! ## Barcode defaults
//!
//! `^BYw,r,h` is positionless and applies to every barcode after it.

use serde::{Deserialize, Deserializer, Serialize};

use super::{BoundingBox, FieldBody, Frame};
use crate::confine::{COORD_MAX, confine};
use crate::protocol::barcode::{BarcodeMode, Orientation, Symbology};
use crate::protocol::commands::{BARCODE, BARCODE_DEFAULTS, FIELD_DATA, segment, yes_no};

// ============================================================================
// BARCODE
// ============================================================================

/// A barcode symbol.
///
/// ## Example
///
/// ```
/// use zebrakit::field::{Barcode, Field};
/// use zebrakit::protocol::barcode::Symbology;
///
/// let code128 = Field::barcode(Barcode::new("12345678")).at(100, 550);
/// assert_eq!(code128.render(), "^FO100,550,0^BCN,,Y,N,N,N^FD12345678^FS");
///
/// let code39 = Barcode::new("HELLO").symbology(Symbology::Code39).height(Some(80));
/// assert_eq!(Field::barcode(code39).render(), "^FO0,0,0^B3N,80,Y,N,N,N^FDHELLO^FS");
/// ```
///
/// In JSON, a missing option takes the [`Barcode::new`] default and an
/// explicit `null` leaves it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barcode {
    #[serde(default)]
    content: String,
    #[serde(default)]
    symbology: Symbology,
    #[serde(default = "default_orientation")]
    orientation: Option<Orientation>,
    #[serde(default, deserialize_with = "deserialize_optional_bar_height")]
    bar_height: Option<i32>,
    #[serde(default = "flag_on")]
    interpretation_line: Option<bool>,
    #[serde(default = "flag_off")]
    line_above: Option<bool>,
    #[serde(default = "flag_off")]
    check_digit: Option<bool>,
    #[serde(default = "default_mode")]
    mode: Option<BarcodeMode>,
}

fn default_orientation() -> Option<Orientation> {
    Some(Orientation::Normal)
}

fn flag_on() -> Option<bool> {
    Some(true)
}

fn flag_off() -> Option<bool> {
    Some(false)
}

fn default_mode() -> Option<BarcodeMode> {
    Some(BarcodeMode::None)
}

fn deserialize_optional_bar_height<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<i64>::deserialize(deserializer)?;
    Ok(v.map(|h| confine(h, 1, COORD_MAX as i64) as i32))
}

impl Barcode {
    /// Code 128 with the usual defaults: normal orientation, interpretation
    /// line below, no line above, no check digit, no mode.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            symbology: Symbology::Code128,
            orientation: default_orientation(),
            bar_height: None,
            interpretation_line: flag_on(),
            line_above: flag_off(),
            check_digit: flag_off(),
            mode: default_mode(),
        }
    }

    /// Code 128 with every option left to the printer.
    pub fn unset(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            symbology: Symbology::Code128,
            orientation: None,
            bar_height: None,
            interpretation_line: None,
            line_above: None,
            check_digit: None,
            mode: None,
        }
    }

    pub fn symbology(mut self, symbology: Symbology) -> Self {
        self.symbology = symbology;
        self
    }

    pub fn orientation(mut self, orientation: Option<Orientation>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Bar height in dots; `None` uses the `^BY` default.
    pub fn height(mut self, height: Option<i32>) -> Self {
        self.bar_height = height.map(|h| confine(h, 1, COORD_MAX));
        self
    }

    /// Print the human readable interpretation line.
    pub fn interpretation_line(mut self, flag: Option<bool>) -> Self {
        self.interpretation_line = flag;
        self
    }

    /// Print the interpretation line above the code instead of below.
    pub fn line_above(mut self, flag: Option<bool>) -> Self {
        self.line_above = flag;
        self
    }

    /// Add a UCC check digit.
    pub fn check_digit(mut self, flag: Option<bool>) -> Self {
        self.check_digit = flag;
        self
    }

    pub fn mode(mut self, mode: Option<BarcodeMode>) -> Self {
        self.mode = mode;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl FieldBody for Barcode {
    fn payload(&self, _frame: &Frame) -> String {
        let mut out = String::with_capacity(24 + self.content.len());
        out.push_str(BARCODE);
        out.push(self.symbology.code());
        if let Some(orientation) = self.orientation {
            out.push(orientation.code());
        }
        out.push_str(&segment(self.bar_height));
        out.push_str(&segment(self.interpretation_line.map(yes_no)));
        out.push_str(&segment(self.line_above.map(yes_no)));
        out.push_str(&segment(self.check_digit.map(yes_no)));
        out.push_str(&segment(self.mode));
        out.push_str(FIELD_DATA);
        out.push_str(&self.content);
        out
    }
}

// ============================================================================
// BARCODE DEFAULTS
// ============================================================================

fn deserialize_module_width<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = i64::deserialize(deserializer)?;
    Ok(confine(v, 1, 100) as i32)
}

fn deserialize_bar_height<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = i64::deserialize(deserializer)?;
    Ok(confine(v, 1, COORD_MAX as i64) as i32)
}

fn default_module_width() -> i32 {
    2
}

fn default_ratio() -> f64 {
    3.0
}

fn default_bar_height() -> i32 {
    10
}

/// Barcode defaults for every following barcode (`^BY`).
///
/// ```
/// use zebrakit::field::{BarcodeConfig, Field};
///
/// let by = BarcodeConfig::new(5, 2.0, 270);
/// assert_eq!(Field::barcode_config(by).render(), "^BY5,2,270");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeConfig {
    #[serde(default = "default_module_width", deserialize_with = "deserialize_module_width")]
    module_width: i32,
    #[serde(default = "default_ratio")]
    ratio: f64,
    #[serde(default = "default_bar_height", deserialize_with = "deserialize_bar_height")]
    bar_height: i32,
}

impl Default for BarcodeConfig {
    fn default() -> Self {
        Self {
            module_width: default_module_width(),
            ratio: default_ratio(),
            bar_height: default_bar_height(),
        }
    }
}

impl BarcodeConfig {
    /// Module width is confined to 1–100 and height to at least 1.
    pub fn new(module_width: i32, ratio: f64, bar_height: i32) -> Self {
        Self {
            module_width: confine(module_width, 1, 100),
            ratio,
            bar_height: confine(bar_height, 1, COORD_MAX),
        }
    }

    pub fn module_width(&self) -> i32 {
        self.module_width
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn bar_height(&self) -> i32 {
        self.bar_height
    }
}

impl FieldBody for BarcodeConfig {
    fn positioned(&self) -> bool {
        false
    }

    fn payload(&self, _frame: &Frame) -> String {
        format!(
            "{}{}{}{}",
            BARCODE_DEFAULTS,
            self.module_width,
            segment(Some(self.ratio)),
            segment(Some(self.bar_height))
        )
    }

    fn bounding_box(&self, frame: &Frame) -> BoundingBox {
        BoundingBox {
            x: frame.x(),
            y: frame.y(),
            width: self.module_width,
            height: self.bar_height,
        }
    }
}
