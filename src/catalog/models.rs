//! Model catalog: the fixed set of generation engines, their capability
//! flags, and their default sampling parameters.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A generation engine known to the remote API.
///
/// Each variant carries its static data (wire id, capabilities, defaults,
/// prompt fragments) as lookup tables; nothing here is computed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationModel {
    #[serde(rename = "google:4@1")]
    GeminiFlashImage,
    #[serde(rename = "civitai:4201@130072")]
    RealisticVision,
    #[serde(rename = "civitai:4384@128713")]
    DreamShaper,
    #[serde(rename = "runware:100@1")]
    SdxlBase,
    #[serde(rename = "civitai:81458@132760")]
    AbsoluteReality,
}

impl GenerationModel {
    /// All models, in display order.
    pub const ALL: [GenerationModel; 5] = [
        GenerationModel::GeminiFlashImage,
        GenerationModel::RealisticVision,
        GenerationModel::DreamShaper,
        GenerationModel::SdxlBase,
        GenerationModel::AbsoluteReality,
    ];

    /// Stable wire identifier understood by the API.
    pub fn id(&self) -> &'static str {
        match self {
            Self::GeminiFlashImage => "google:4@1",
            Self::RealisticVision => "civitai:4201@130072",
            Self::DreamShaper => "civitai:4384@128713",
            Self::SdxlBase => "runware:100@1",
            Self::AbsoluteReality => "civitai:81458@132760",
        }
    }

    /// Human-readable model name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GeminiFlashImage => "Gemini Flash Image 25",
            Self::RealisticVision => "Realistic Vision",
            Self::DreamShaper => "DreamShaper",
            Self::SdxlBase => "SDXL Base",
            Self::AbsoluteReality => "Absolute Reality",
        }
    }

    /// One-line description of what the model is good at.
    pub fn description(&self) -> &'static str {
        match self {
            Self::GeminiFlashImage | Self::SdxlBase => {
                "General purpose, high quality, versatile"
            }
            Self::RealisticVision => "Photorealistic, detailed portraits and landscapes",
            Self::DreamShaper => "Artistic, dreamlike, fantasy-oriented",
            Self::AbsoluteReality => "Ultra-realistic, cinematic quality",
        }
    }

    /// Short descriptor of the mindfulness aesthetic the model leans toward.
    pub fn style_descriptor(&self) -> &'static str {
        match self {
            Self::GeminiFlashImage | Self::SdxlBase => {
                "balanced, harmonious mindful compositions"
            }
            Self::RealisticVision => "photographic meditation scenes with natural lighting",
            Self::DreamShaper => "ethereal, dreamlike mindfulness imagery",
            Self::AbsoluteReality => "cinematic, inspiring mindfulness photography",
        }
    }

    /// Prompt fragment appended for every request routed to this model.
    pub fn prompt_enhancement(&self) -> &'static str {
        match self {
            Self::GeminiFlashImage | Self::RealisticVision => {
                ", masterpiece, ultra-realistic, professional photography, natural lighting, serene atmosphere, high detail, peaceful expression"
            }
            Self::DreamShaper => {
                ", ethereal beauty, soft dreamy lighting, magical atmosphere, fantasy art style, enchanting, peaceful aura, artistic masterpiece"
            }
            Self::SdxlBase => {
                ", high quality, balanced composition, harmonious colors, zen aesthetic, tranquil mood, premium artwork, detailed"
            }
            Self::AbsoluteReality => {
                ", cinematic quality, dramatic lighting, ultra-high definition, photorealistic, inspiring scene, emotional depth, award-winning"
            }
        }
    }

    /// Default `(steps, cfg_scale)` pair tuned for this model.
    pub fn default_settings(&self) -> (u32, f64) {
        match self {
            Self::GeminiFlashImage => (25, 7.0),
            Self::RealisticVision => (25, 7.0),
            Self::DreamShaper => (20, 7.5),
            Self::SdxlBase => (25, 4.0),
            Self::AbsoluteReality => (30, 6.5),
        }
    }

    /// Whether the API accepts explicit width/height for this model.
    pub fn supports_dimensions(&self) -> bool {
        !matches!(self, Self::GeminiFlashImage)
    }

    /// Whether the API accepts a steps parameter for this model.
    pub fn supports_steps(&self) -> bool {
        !matches!(self, Self::GeminiFlashImage)
    }

    /// Whether the API accepts a CFG scale parameter for this model.
    pub fn supports_cfg_scale(&self) -> bool {
        !matches!(self, Self::GeminiFlashImage)
    }

    /// Look up a model by its wire id.
    pub fn lookup(model_id: &str) -> Result<GenerationModel> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.id() == model_id)
            .ok_or_else(|| AppError::UnknownModel(model_id.to_string()))
    }

    /// Parse a model from its wire id or display name. The name form
    /// ignores case and separators. Used for CLI flags and configuration
    /// values, hence the plain string error.
    pub fn parse(s: &str) -> std::result::Result<GenerationModel, String> {
        if let Ok(model) = Self::lookup(s.trim()) {
            return Ok(model);
        }
        let wanted = crate::catalog::normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|model| crate::catalog::normalize(model.display_name()) == wanted)
            .ok_or_else(|| format!("unknown model '{}'", s))
    }

    /// Display name for a wire id, falling back to the raw id when the id
    /// is not in the catalog. Total; never fails.
    pub fn display_name_for(model_id: &str) -> String {
        Self::lookup(model_id)
            .map(|m| m.display_name().to_string())
            .unwrap_or_else(|_| model_id.to_string())
    }
}

impl std::fmt::Display for GenerationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trip() {
        for model in GenerationModel::ALL {
            assert_eq!(GenerationModel::lookup(model.id()).unwrap(), model);
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(matches!(
            GenerationModel::lookup("civitai:0@0"),
            Err(AppError::UnknownModel(_))
        ));
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(
            GenerationModel::display_name_for("runware:100@1"),
            "SDXL Base"
        );
        assert_eq!(
            GenerationModel::display_name_for("someorg:1@1"),
            "someorg:1@1"
        );
    }

    #[test]
    fn test_parse_accepts_wire_id_and_name() {
        assert_eq!(
            GenerationModel::parse("runware:100@1").unwrap(),
            GenerationModel::SdxlBase
        );
        assert_eq!(
            GenerationModel::parse("dream-shaper").unwrap(),
            GenerationModel::DreamShaper
        );
        assert!(GenerationModel::parse("midjourney").is_err());
    }

    #[test]
    fn test_serde_uses_wire_id() {
        let json = serde_json::to_string(&GenerationModel::DreamShaper).unwrap();
        assert_eq!(json, "\"civitai:4384@128713\"");
    }
}
