//! # Render Dispatch
//!
//! Turns a label into a PDF or PNG by sending its markup to a remote
//! rendering service.
//!
//! ## Modules
//!
//! - [`labelary`]: HTTP client for the Labelary API
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::path::Path;
//! use zebrakit::label::Label;
//! use zebrakit::render::{LabelaryClient, OutputFormat, save_artifact};
//!
//! # async fn demo() -> zebrakit::error::ZebraResult<()> {
//! let label = Label::new().add_text("Hello", (50, 50));
//! let client = LabelaryClient::new()?;
//! let format: OutputFormat = "png".parse()?;
//!
//! let bytes = label.render_with(&client, format, true).await?;
//! let path = save_artifact(&bytes, format, Path::new("."))?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! The [`RenderDispatch`] trait is the seam between a label and whatever
//! produces pixels. Tests plug in their own dispatcher instead of the HTTP
//! client.

pub mod labelary;

pub use labelary::LabelaryClient;

use async_trait::async_trait;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ZebraError, ZebraResult};
use crate::label::Label;
use crate::printer::{LabelSize, Resolution};

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

/// File format of a rendered label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Pdf,
    #[default]
    Png,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png",
        }
    }

    /// `Accept` header to send, if any. PNG is what the service returns
    /// when nothing is asked for.
    pub fn accept(self) -> Option<&'static str> {
        match self {
            OutputFormat::Pdf => Some("application/pdf"),
            OutputFormat::Png => None,
        }
    }
}

/// Parses `pdf` or `png` ignoring ASCII case, so `PDF` and `Png` are
/// accepted too. The error keeps the input as given.
impl FromStr for OutputFormat {
    type Err = ZebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "png" => Ok(OutputFormat::Png),
            _ => Err(ZebraError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// ============================================================================
// REQUEST
// ============================================================================

/// Everything a renderer needs to know about one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub zpl: String,
    pub format: OutputFormat,
    pub resolution: Resolution,
    pub size: LabelSize,
}

impl RenderRequest {
    /// Wrapped, single-line markup plus the label's physical properties.
    pub fn from_label(label: &Label, format: OutputFormat) -> Self {
        Self {
            zpl: label.serialize(true, false),
            format,
            resolution: label.resolution(),
            size: label.size(),
        }
    }
}

/// Something that turns markup into image or document bytes.
#[async_trait]
pub trait RenderDispatch: Send + Sync {
    async fn render(&self, request: &RenderRequest) -> ZebraResult<Vec<u8>>;
}

// ============================================================================
// ARTIFACTS
// ============================================================================

/// Write rendered bytes to `dir/label.<ext>`, creating `dir` if needed.
pub fn save_artifact(bytes: &[u8], format: OutputFormat, dir: &Path) -> ZebraResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("label.{}", format.extension()));
    fs::write(&path, bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved rendered label");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert!(matches!(
            "gif".parse::<OutputFormat>(),
            Err(ZebraError::InvalidFormat(f)) if f == "gif"
        ));
    }

    #[test]
    fn test_format_parsing_ignores_case() {
        for input in ["pdf", "PDF", "Pdf", "pDf"] {
            assert_eq!(input.parse::<OutputFormat>().unwrap(), OutputFormat::Pdf, "{input}");
        }
        assert!(matches!(
            "PNG8".parse::<OutputFormat>(),
            Err(ZebraError::InvalidFormat(f)) if f == "PNG8"
        ));
    }

    #[test]
    fn test_format_headers() {
        assert_eq!(OutputFormat::Pdf.accept(), Some("application/pdf"));
        assert_eq!(OutputFormat::Png.accept(), None);
        assert_eq!(OutputFormat::Pdf.to_string(), "pdf");
    }

    #[test]
    fn test_request_from_label() {
        let label = Label::new()
            .with_resolution(Resolution::Dpmm12)
            .add_text("x", (1, 1));
        let request = RenderRequest::from_label(&label, OutputFormat::Pdf);
        assert_eq!(request.zpl, "^XA^FO1,1,0^FDx^FS^XZ");
        assert_eq!(request.resolution, Resolution::Dpmm12);
        assert_eq!(request.size, LabelSize::inches(4, 6));
    }

    #[test]
    fn test_save_artifact() {
        let dir = std::env::temp_dir().join(format!("zebrakit-artifact-{}", std::process::id()));
        let path = save_artifact(b"%PDF-1.4", OutputFormat::Pdf, &dir).unwrap();
        assert_eq!(path, dir.join("label.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4");
        fs::remove_dir_all(&dir).unwrap();
    }
}
