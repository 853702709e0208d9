//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use crate::catalog::{AspectRatio, ContentSeries, GenerationModel, StylePreset};
use crate::composer::ComposeInput;
use crate::config::GenerationDefaults;

#[derive(Parser, Debug)]
#[command(name = "poster", about = "Mindfulness poster generation engine", version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands, split by what they need: setup commands touch only
/// the local store, engine commands run against the orchestrator.
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Engine(EngineCommand),

    #[command(flatten)]
    Setup(SetupCommand),
}

/// Commands that drive the generation engine and gallery.
#[derive(Subcommand, Debug)]
pub enum EngineCommand {
    /// Generate a single poster from a prompt
    Generate {
        /// The mindfulness prompt to generate from
        prompt: String,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Generate a batch of posters from a prompt
    Batch {
        /// The mindfulness prompt to generate from
        prompt: String,

        /// Number of images to request (defaults to the configured batch count)
        #[arg(long)]
        count: Option<u32>,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Re-run generation using a stored poster's prompt text
    Regenerate {
        /// Record id of the stored poster
        id: Uuid,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List stored posters, newest first
    Gallery,

    /// Delete a stored poster
    Delete {
        /// Record id of the stored poster
        id: Uuid,
    },

    /// Write a stored poster's image bytes to the export directory
    Export {
        /// Record id of the stored poster
        id: Uuid,
    },

    /// Show the request log and the daily cost total
    Logs,
}

/// Commands that only read or write the local store.
#[derive(Subcommand, Debug)]
pub enum SetupCommand {
    /// Show today's content series and prompt suggestions
    Suggest,

    /// Store the API key
    SetKey {
        /// Bearer token for the image generation API
        key: String,
    },

    /// Read or toggle stored preferences
    Prefs {
        /// Persist the advanced-controls flag
        #[arg(long)]
        advanced: Option<bool>,

        /// Persist the developer-mode flag
        #[arg(long)]
        developer: Option<bool>,
    },
}

/// Generation selections shared by the generate/batch/regenerate commands.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Content series, e.g. "monday-motivation" or "Daily Affirmation"
    #[arg(long, value_parser = ContentSeries::parse)]
    pub series: Option<ContentSeries>,

    /// Aspect ratio: square, portrait, story, or landscape
    #[arg(long, value_parser = AspectRatio::parse)]
    pub ratio: Option<AspectRatio>,

    /// Model, by wire id or name, e.g. "dreamshaper" or "runware:100@1"
    #[arg(long, value_parser = GenerationModel::parse)]
    pub model: Option<GenerationModel>,

    /// Enable advanced controls for this invocation
    #[arg(long)]
    pub advanced: bool,

    /// Style preset (advanced mode), e.g. "minimalist"
    #[arg(long, value_parser = StylePreset::parse)]
    pub style: Option<StylePreset>,

    /// Extra negative prompt text (advanced mode)
    #[arg(long)]
    pub negative: Option<String>,

    /// Seed override (advanced mode)
    #[arg(long)]
    pub seed: Option<String>,
}

impl SelectionArgs {
    /// Build the composer input for this invocation. Flags win over the
    /// configured defaults.
    ///
    /// `advanced_default` is the persisted advanced-controls preference;
    /// the `--advanced` flag enables it for a single run.
    pub fn compose_input(
        &self,
        raw_prompt: String,
        advanced_default: bool,
        result_count: u32,
        defaults: &GenerationDefaults,
    ) -> ComposeInput {
        ComposeInput {
            raw_prompt,
            series: self.series.unwrap_or(defaults.series),
            aspect_ratio: self.ratio.unwrap_or(defaults.ratio),
            model: self.model.unwrap_or(defaults.model),
            advanced: self.advanced || advanced_default,
            style: self.style.unwrap_or(defaults.style),
            negative_override: self.negative.clone(),
            seed_override: self.seed.clone(),
            result_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_selection() -> SelectionArgs {
        SelectionArgs {
            series: None,
            ratio: None,
            model: None,
            advanced: false,
            style: None,
            negative: None,
            seed: None,
        }
    }

    fn configured_defaults() -> GenerationDefaults {
        GenerationDefaults {
            model: GenerationModel::SdxlBase,
            series: ContentSeries::MindfulMoment,
            ratio: AspectRatio::Story,
            style: StylePreset::Watercolor,
        }
    }

    #[test]
    fn test_compose_input_uses_configured_defaults() {
        let input = bare_selection().compose_input(
            "calm water".to_string(),
            false,
            1,
            &configured_defaults(),
        );
        assert_eq!(input.model, GenerationModel::SdxlBase);
        assert_eq!(input.series, ContentSeries::MindfulMoment);
        assert_eq!(input.aspect_ratio, AspectRatio::Story);
        assert_eq!(input.style, StylePreset::Watercolor);
    }

    #[test]
    fn test_compose_input_flags_override_configured_defaults() {
        let mut selection = bare_selection();
        selection.model = Some(GenerationModel::AbsoluteReality);
        selection.ratio = Some(AspectRatio::Landscape);

        let input = selection.compose_input(
            "calm water".to_string(),
            false,
            1,
            &configured_defaults(),
        );
        assert_eq!(input.model, GenerationModel::AbsoluteReality);
        assert_eq!(input.aspect_ratio, AspectRatio::Landscape);
        // Unflagged selections still come from the configuration
        assert_eq!(input.series, ContentSeries::MindfulMoment);
    }

    #[test]
    fn test_advanced_flag_or_preference_enables_advanced_mode() {
        let mut selection = bare_selection();
        let defaults = configured_defaults();

        let input = selection.compose_input("calm".to_string(), true, 1, &defaults);
        assert!(input.advanced);

        selection.advanced = true;
        let input = selection.compose_input("calm".to_string(), false, 1, &defaults);
        assert!(input.advanced);
    }
}
