//! Application settings and configuration management

use crate::catalog::{AspectRatio, ContentSeries, GenerationModel, StylePreset};
use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bearer token; usually supplied via `POSTER__API__KEY`.
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.runware.ai/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Local storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_state_path")]
    pub state_path: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_state_path() -> String {
    "./poster-state.json".to_string()
}

fn default_export_dir() -> String {
    "./exported_posters".to_string()
}

/// Generation defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    #[serde(default = "default_batch_count")]
    pub batch_count: u32,
    /// Model used when no `--model` flag is given; wire id or display name.
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_series")]
    pub default_series: String,
    #[serde(default = "default_ratio")]
    pub default_ratio: String,
    /// Style preset applied in advanced mode when no `--style` flag is given.
    #[serde(default = "default_style")]
    pub default_style: String,
}

fn default_batch_count() -> u32 {
    4
}

fn default_model() -> String {
    "DreamShaper".to_string()
}

fn default_series() -> String {
    "Daily Affirmation".to_string()
}

fn default_ratio() -> String {
    "square".to_string()
}

fn default_style() -> String {
    "Minimalist".to_string()
}

/// Configured default selections resolved against the catalogs.
#[derive(Debug, Clone, Copy)]
pub struct GenerationDefaults {
    pub model: GenerationModel,
    pub series: ContentSeries,
    pub ratio: AspectRatio,
    pub style: StylePreset,
}

impl GenerationConfig {
    /// Resolve the configured default selections. Fails when a configured
    /// value names nothing in the catalogs.
    pub fn resolved(&self) -> Result<GenerationDefaults> {
        Ok(GenerationDefaults {
            model: GenerationModel::parse(&self.default_model).map_err(invalid_default)?,
            series: ContentSeries::parse(&self.default_series).map_err(invalid_default)?,
            ratio: AspectRatio::parse(&self.default_ratio).map_err(invalid_default)?,
            style: StylePreset::parse(&self.default_style).map_err(invalid_default)?,
        })
    }
}

fn invalid_default(message: String) -> AppError {
    AppError::Config(config::ConfigError::Message(message))
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            // Start with default values
            .set_default("api.endpoint", default_endpoint())?
            .set_default("api.key", "")?
            .set_default("api.timeout_secs", default_timeout_secs() as i64)?
            .set_default("storage.state_path", default_state_path())?
            .set_default("storage.export_dir", default_export_dir())?
            .set_default("generation.batch_count", default_batch_count() as i64)?
            .set_default("generation.default_model", default_model())?
            .set_default("generation.default_series", default_series())?
            .set_default("generation.default_ratio", default_ratio())?
            .set_default("generation.default_style", default_style())?
            .set_default("logging.level", default_log_level())?
            // Load from configuration file
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/default"))
                    .required(false),
            )
            // Override with environment variables (prefixed with POSTER__)
            .add_source(
                Environment::with_prefix("POSTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "API endpoint cannot be empty".to_string(),
            )));
        }
        if self.generation.batch_count == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Batch count must be at least 1".to_string(),
            )));
        }
        self.generation.resolved()?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: default_endpoint(),
                key: String::new(),
                timeout_secs: default_timeout_secs(),
            },
            storage: StorageConfig {
                state_path: default_state_path(),
                export_dir: default_export_dir(),
            },
            generation: GenerationConfig {
                batch_count: default_batch_count(),
                default_model: default_model(),
                default_series: default_series(),
                default_ratio: default_ratio(),
                default_style: default_style(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.endpoint, "https://api.runware.ai/v1");
        assert_eq!(settings.generation.batch_count, 4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_selections_resolve() {
        let defaults = Settings::default().generation.resolved().unwrap();
        assert_eq!(defaults.model, GenerationModel::DreamShaper);
        assert_eq!(defaults.series, ContentSeries::DailyAffirmation);
        assert_eq!(defaults.ratio, AspectRatio::Square);
        assert_eq!(defaults.style, StylePreset::Minimalist);
    }

    #[test]
    fn test_configured_selections_resolve_by_id_or_name() {
        let mut settings = Settings::default();
        settings.generation.default_model = "runware:100@1".to_string();
        settings.generation.default_series = "monday-motivation".to_string();
        settings.generation.default_ratio = "16:9".to_string();
        settings.generation.default_style = "Watercolor".to_string();

        let defaults = settings.generation.resolved().unwrap();
        assert_eq!(defaults.model, GenerationModel::SdxlBase);
        assert_eq!(defaults.series, ContentSeries::MondayMotivation);
        assert_eq!(defaults.ratio, AspectRatio::Landscape);
        assert_eq!(defaults.style, StylePreset::Watercolor);
    }

    #[test]
    fn test_unknown_default_model_rejected() {
        let mut settings = Settings::default();
        settings.generation.default_model = "midjourney".to_string();
        assert!(matches!(settings.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_batch_count_rejected() {
        let mut settings = Settings::default();
        settings.generation.batch_count = 0;
        assert!(settings.validate().is_err());
    }
}
