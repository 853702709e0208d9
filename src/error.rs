//! Common error types for the poster generation engine

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("No API key configured")]
    MissingCredential,

    #[error("API request failed with HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("Failed to decode API response: {0}")]
    Decode(String),

    #[error("Failed to fetch artifact: {0}")]
    ArtifactFetch(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
