//! Request composer: the pure transformation from user selections to an
//! outbound image inference request.
//!
//! Composition order matters and is fixed: series prefix, raw prompt, model
//! enhancement, then the style suffix (preset when advanced controls are on,
//! series otherwise). The negative prompt and seed are only user-overridable
//! in advanced mode.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{AspectRatio, ContentSeries, GenerationModel, StylePreset};
use crate::error::{AppError, Result};

/// Negative prompt used whenever advanced controls are off.
pub const DEFAULT_NEGATIVE_PROMPT: &str = "chaotic, busy, stressful, harsh, aggressive";

/// Minimum length of the trimmed raw prompt.
const MIN_PROMPT_LEN: usize = 3;

/// One image inference task as transmitted to the API.
///
/// Optional fields are omitted from the JSON body entirely when unset; the
/// field names and casing are dictated by the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "taskType")]
    pub task_type: String,
    #[serde(rename = "taskUUID")]
    pub task_uuid: Uuid,
    #[serde(rename = "positivePrompt")]
    pub positive_prompt: String,
    #[serde(rename = "negativePrompt", skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(rename = "CFGScale", skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(rename = "numberResults", skip_serializing_if = "Option::is_none")]
    pub number_results: Option<u32>,
}

/// User selections feeding one composition.
#[derive(Debug, Clone)]
pub struct ComposeInput {
    /// Raw prompt text as typed by the user.
    pub raw_prompt: String,
    pub series: ContentSeries,
    pub aspect_ratio: AspectRatio,
    pub model: GenerationModel,
    /// Whether advanced controls are active.
    pub advanced: bool,
    /// Style preset; only consulted when `advanced` is on.
    pub style: StylePreset,
    /// Extra negative prompt text; only consulted when `advanced` is on.
    pub negative_override: Option<String>,
    /// Seed override as typed; only used when `advanced` is on and the
    /// string parses as an integer.
    pub seed_override: Option<String>,
    /// Number of images to request, at least 1.
    pub result_count: u32,
}

impl ComposeInput {
    /// Input with default selections for a single generation.
    pub fn new(raw_prompt: impl Into<String>) -> Self {
        Self {
            raw_prompt: raw_prompt.into(),
            series: ContentSeries::default(),
            aspect_ratio: AspectRatio::default(),
            model: GenerationModel::DreamShaper,
            advanced: false,
            style: StylePreset::default(),
            negative_override: None,
            seed_override: None,
            result_count: 1,
        }
    }
}

/// Build a validated [`GenerationRequest`] from user selections.
///
/// Fails only with [`AppError::InvalidPrompt`] when the trimmed raw prompt
/// is shorter than 3 characters. Purely a transformation; no side effects.
pub fn compose(input: &ComposeInput) -> Result<GenerationRequest> {
    let trimmed = input.raw_prompt.trim();
    if trimmed.chars().count() < MIN_PROMPT_LEN {
        return Err(AppError::InvalidPrompt(format!(
            "prompt must be at least {} characters",
            MIN_PROMPT_LEN
        )));
    }

    // The model enhancement fragment is joined with a space, not
    // concatenated directly.
    let mut positive = format!(
        "{}{} {}",
        input.series.prompt_prefix(),
        input.raw_prompt,
        input.model.prompt_enhancement(),
    );
    if input.advanced {
        positive.push_str(input.style.style_suffix());
    } else {
        positive.push_str(input.series.style_suffix());
    }

    let negative = if input.advanced {
        match input.negative_override.as_deref() {
            Some(text) if !text.is_empty() => {
                format!("{}, {}", text, input.style.negative_suffix())
            }
            _ => input.style.negative_suffix().to_string(),
        }
    } else {
        DEFAULT_NEGATIVE_PROMPT.to_string()
    };

    let seed = if input.advanced {
        input
            .seed_override
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
    } else {
        None
    };

    let (width, height) = if input.model.supports_dimensions() {
        let (w, h) = input.aspect_ratio.dimensions();
        debug_assert!(crate::catalog::ratios::dimension_is_valid(w));
        debug_assert!(crate::catalog::ratios::dimension_is_valid(h));
        (Some(w), Some(h))
    } else {
        (None, None)
    };

    let (default_steps, default_cfg) = input.model.default_settings();

    Ok(GenerationRequest {
        task_type: "imageInference".to_string(),
        task_uuid: Uuid::new_v4(),
        positive_prompt: positive,
        negative_prompt: Some(negative),
        width,
        height,
        model: input.model.id().to_string(),
        steps: input.model.supports_steps().then_some(default_steps),
        cfg_scale: input.model.supports_cfg_scale().then_some(default_cfg),
        seed,
        number_results: Some(input.result_count.max(1)),
    })
}
