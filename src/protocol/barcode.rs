//! # ZPL Barcode Options
//!
//! Parameter vocabularies for the `^B` family of commands.
//!
//! ## Symbologies
//!
//! Every barcode command is `^B` followed by a one-character symbology code:
//!
//! | Code | Symbology | Code | Symbology |
//! |------|-----------|------|-----------|
//! | `0` | Aztec | `E` | EAN-13 |
//! | `1` | Code 11 | `F` | MicroPDF417 |
//! | `2` | Interleaved 2 of 5 | `I` | Industrial 2 of 5 |
//! | `3` | Code 39 | `J` | Standard 2 of 5 |
//! | `4` | Code 49 | `K` | ANSI Codabar |
//! | `5` | Planet Code | `L` | LOGMARS |
//! | `7` | PDF417 | `M` | MSI |
//! | `8` | EAN-8 | `P` | Plessey |
//! | `9` | UPC-E | `Q` | QR Code |
//! | `A` | Code 93 | `R` | GS1 DataBar |
//! | `B` | CODABLOCK | `T` | TLC39 |
//! | `C` | Code 128 | `U` | UPC-A |
//! | `D` | UPS MaxiCode | `X` | Data Matrix |
//! |     |              | `Z` | Postal |
//!
//! ## Code 128 Layout
//!
//! ```text
//! ^BCo,h,f,g,e,m
//!    │ │ │ │ │ └─ mode (N none, U UCC case, A automatic, D UCC/EAN)
//!    │ │ │ │ └─── UCC check digit (Y/N)
//!    │ │ │ └───── interpretation line above the code (Y/N)
//!    │ │ └─────── print interpretation line (Y/N)
//!    │ └───────── bar height in dots (empty = ^BY default)
//!    └─────────── orientation (N, R, I, B)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Barcode symbology, rendered as its one-character ZPL code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    Aztec,
    Code11,
    Interleaved2of5,
    Code39,
    Code49,
    PlanetCode,
    Pdf417,
    Ean8,
    UpcE,
    Code93,
    Codablock,
    #[default]
    Code128,
    MaxiCode,
    Ean13,
    MicroPdf417,
    Industrial2of5,
    Standard2of5,
    AnsiCodabar,
    Logmars,
    Msi,
    Plessey,
    QrCode,
    Gs1DataBar,
    Tlc39,
    UpcA,
    DataMatrix,
    Postal,
}

impl Symbology {
    /// The ZPL code that follows `^B`.
    pub fn code(self) -> char {
        match self {
            Symbology::Aztec => '0',
            Symbology::Code11 => '1',
            Symbology::Interleaved2of5 => '2',
            Symbology::Code39 => '3',
            Symbology::Code49 => '4',
            Symbology::PlanetCode => '5',
            Symbology::Pdf417 => '7',
            Symbology::Ean8 => '8',
            Symbology::UpcE => '9',
            Symbology::Code93 => 'A',
            Symbology::Codablock => 'B',
            Symbology::Code128 => 'C',
            Symbology::MaxiCode => 'D',
            Symbology::Ean13 => 'E',
            Symbology::MicroPdf417 => 'F',
            Symbology::Industrial2of5 => 'I',
            Symbology::Standard2of5 => 'J',
            Symbology::AnsiCodabar => 'K',
            Symbology::Logmars => 'L',
            Symbology::Msi => 'M',
            Symbology::Plessey => 'P',
            Symbology::QrCode => 'Q',
            Symbology::Gs1DataBar => 'R',
            Symbology::Tlc39 => 'T',
            Symbology::UpcA => 'U',
            Symbology::DataMatrix => 'X',
            Symbology::Postal => 'Z',
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Field orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Normal
    #[default]
    #[serde(rename = "N")]
    Normal,
    /// Rotated 90 degrees clockwise
    #[serde(rename = "R")]
    Rotated,
    /// Inverted 180 degrees
    #[serde(rename = "I")]
    Inverted,
    /// Read from bottom up, 270 degrees
    #[serde(rename = "B")]
    BottomUp,
}

impl Orientation {
    pub fn code(self) -> char {
        match self {
            Orientation::Normal => 'N',
            Orientation::Rotated => 'R',
            Orientation::Inverted => 'I',
            Orientation::BottomUp => 'B',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Code 128 subset mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarcodeMode {
    /// No selected mode
    #[default]
    #[serde(rename = "N")]
    None,
    /// UCC case mode
    #[serde(rename = "U")]
    UccCase,
    /// Automatic mode
    #[serde(rename = "A")]
    Automatic,
    /// UCC/EAN mode
    #[serde(rename = "D")]
    UccEan,
}

impl BarcodeMode {
    pub fn code(self) -> char {
        match self {
            BarcodeMode::None => 'N',
            BarcodeMode::UccCase => 'U',
            BarcodeMode::Automatic => 'A',
            BarcodeMode::UccEan => 'D',
        }
    }
}

impl fmt::Display for BarcodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
