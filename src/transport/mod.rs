//! Transport: the outbound API seam and its wire types.

pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composer::GenerationRequest;
use crate::error::Result;

pub use client::ApiClient;

/// One generated image descriptor as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "taskType", default)]
    pub task_type: Option<String>,
    #[serde(rename = "taskUUID", default)]
    pub task_uuid: Option<Uuid>,
    #[serde(rename = "imageUUID", default)]
    pub image_uuid: Option<Uuid>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    #[serde(rename = "imageBase64Data", default)]
    pub image_base64_data: Option<String>,
    #[serde(rename = "imageDataURI", default)]
    pub image_data_uri: Option<String>,
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(rename = "NSFWContent", default)]
    pub nsfw_content: Option<bool>,
    #[serde(default)]
    pub cost: Option<f64>,
}

/// Envelope wrapping the returned artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    pub data: Vec<Artifact>,
}

/// Outbound transport seam. The orchestrator only speaks to the API
/// through this trait, which keeps it drivable from tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transmit one inference request and await the full response.
    async fn generate(&self, request: &GenerationRequest) -> Result<InferenceResponse>;

    /// Fetch the raw bytes behind an artifact URL.
    async fn fetch_artifact(&self, url: &str) -> Result<Vec<u8>>;
}

/// Transport used when no API key is configured. Every call fails with
/// [`crate::error::AppError::MissingCredential`], so local commands keep
/// working while generation is blocked.
pub struct Unconfigured;

#[async_trait]
impl Transport for Unconfigured {
    async fn generate(&self, _request: &GenerationRequest) -> Result<InferenceResponse> {
        Err(crate::error::AppError::MissingCredential)
    }

    async fn fetch_artifact(&self, _url: &str) -> Result<Vec<u8>> {
        Err(crate::error::AppError::MissingCredential)
    }
}
