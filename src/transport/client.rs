//! HTTP client implementation of the transport seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::composer::GenerationRequest;
use crate::error::{AppError, Result};
use crate::transport::{InferenceResponse, Transport};

/// HTTP client for the image inference API.
///
/// Requests are posted as a single-element JSON array with a bearer token;
/// the response is the `{ "data": [...] }` envelope.
pub struct ApiClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl ApiClient {
    /// Create a new client for the given endpoint and API key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AppError::MissingCredential);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        })
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<InferenceResponse> {
        debug!(
            endpoint = %self.endpoint,
            task_uuid = %request.task_uuid,
            model = %request.model,
            "Sending inference request"
        );

        // The API expects a JSON array of task objects.
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&[request])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("{} (body: {})", e, truncate(&body, 256))))?;

        debug!(
            task_uuid = %request.task_uuid,
            artifacts = parsed.data.len(),
            "Decoded inference response"
        );

        Ok(parsed)
    }

    async fn fetch_artifact(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::ArtifactFetch(format!("{}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::ArtifactFetch(format!(
                "{}: HTTP {}",
                url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ArtifactFetch(format!("{}: {}", url, e)))?;

        debug!(url = %url, size = bytes.len(), "Fetched artifact");
        Ok(bytes.to_vec())
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
