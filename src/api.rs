//! HTTP client for the `/compile` analysis service.
//!
//! One POST per analysis cycle, no retries, no client-side timeout: the
//! request runs until the service resolves or the connection fails. The
//! body is decoded separately from the transport call so decode failures
//! surface as their own error variant.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::types::{AnalysisResponse, CompileRequest};
use async_trait::async_trait;
use tracing::debug;

/// Seam between the request controller and the network.
///
/// The production implementation is [`ApiClient`]; tests substitute mocks
/// to drive the controller through every settle path offline.
#[async_trait]
pub trait CompileBackend: Send + Sync {
    /// Submit source text for analysis and return the decoded response.
    async fn compile(&self, request: &CompileRequest) -> Result<AnalysisResponse, ApiError>;
}

/// Client for the remote compiler pipeline.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from server configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CompileBackend for ApiClient {
    async fn compile(&self, request: &CompileRequest) -> Result<AnalysisResponse, ApiError> {
        let url = format!("{}/compile", self.base_url);
        debug!(url, code_bytes = request.code.len(), "submitting analysis request");

        let response = self.http.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body));
        }

        let raw = response.text().await?;
        let decoded: AnalysisResponse = serde_json::from_str(&raw)?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&ServerConfig {
            base_url: "http://127.0.0.1:5000/".into(),
        });
        assert_eq!(client.base_url, "http://127.0.0.1:5000");
    }
}
