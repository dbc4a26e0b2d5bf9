//! Labelary client.
//!
//! ```text
//! POST {base}/printers/{dpmm}dpmm/labels/{width}x{height}/0/
//! Content-Type: application/x-www-form-urlencoded
//! Accept: application/pdf          (PDF only)
//!
//! ^XA...^XZ
//! ```
//!
//! The trailing `0` is the label index; a format holds one label. One
//! request is made per render, with no retry.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::{RenderDispatch, RenderRequest};
use crate::error::{ZebraError, ZebraResult};
use crate::printer::{LabelSize, Resolution};

/// Render client for the Labelary HTTP API.
#[derive(Debug, Clone)]
pub struct LabelaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl LabelaryClient {
    /// Public Labelary endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "http://api.labelary.com/v1";

    /// Client for the public endpoint.
    pub fn new() -> ZebraResult<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Client for a self-hosted or fake endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> ZebraResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("zebrakit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ZebraError::Transport(format!("HTTP client error: {}", e)))?;
        Ok(Self::with_client(http, base_url))
    }

    /// Reuse an existing HTTP client.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a label of `size` at `resolution`.
    pub fn endpoint(&self, resolution: Resolution, size: LabelSize) -> String {
        format!(
            "{}/printers/{}dpmm/labels/{}x{}/0/",
            self.base_url,
            resolution.dots_per_mm(),
            size.width,
            size.height
        )
    }
}

#[async_trait]
impl RenderDispatch for LabelaryClient {
    async fn render(&self, request: &RenderRequest) -> ZebraResult<Vec<u8>> {
        let url = self.endpoint(request.resolution, request.size);
        tracing::info!(%url, format = %request.format, bytes = request.zpl.len(), "rendering label");

        let mut builder = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(request.zpl.clone());
        if let Some(accept) = request.format.accept() {
            builder = builder.header(ACCEPT, accept);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(%url, error = %e, "render request failed");
            ZebraError::Transport(format!("Failed to reach {}: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "render service rejected label");
            return Err(ZebraError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ZebraError::Transport(format!("Failed to read response: {}", e)))?;
        tracing::info!(status = status.as_u16(), bytes = bytes.len(), "label rendered");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let client = LabelaryClient::new().unwrap();
        assert_eq!(
            client.endpoint(Resolution::Dpmm8, LabelSize::inches(4, 6)),
            "http://api.labelary.com/v1/printers/8dpmm/labels/4x6/0/"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = LabelaryClient::with_base_url("http://127.0.0.1:9000/v1/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000/v1");
        assert_eq!(
            client.endpoint(Resolution::Dpmm12, LabelSize::inches(2, 1)),
            "http://127.0.0.1:9000/v1/printers/12dpmm/labels/2x1/0/"
        );
    }
}
