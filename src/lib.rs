//! Mindful Poster Engine
//!
//! Turns short mindfulness prompts into image generation requests for a
//! remote text-to-image API, and keeps the resulting posters, request log,
//! and daily cost bookkeeping in a local store.

pub mod catalog;
pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod orchestrator;
pub mod store;
pub mod transport;

pub use error::{AppError, Result};

use std::sync::Arc;

use config::Settings;
use orchestrator::Orchestrator;

/// Application state shared across CLI commands
pub struct AppState {
    pub settings: Settings,
    pub orchestrator: Arc<Orchestrator>,
}
