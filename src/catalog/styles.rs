//! Style presets available under advanced controls, each pairing a style
//! fragment with a matching negative-prompt fragment.

use serde::{Deserialize, Serialize};

/// Visual style preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StylePreset {
    #[serde(rename = "Watercolor")]
    Watercolor,
    #[serde(rename = "Photography")]
    Photography,
    #[serde(rename = "Minimalist")]
    Minimalist,
    #[serde(rename = "Soft Illustration")]
    SoftIllustration,
}

impl StylePreset {
    /// All presets, in display order.
    pub const ALL: [StylePreset; 4] = [
        StylePreset::Watercolor,
        StylePreset::Photography,
        StylePreset::Minimalist,
        StylePreset::SoftIllustration,
    ];

    /// Display id of the preset.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Watercolor => "Watercolor",
            Self::Photography => "Photography",
            Self::Minimalist => "Minimalist",
            Self::SoftIllustration => "Soft Illustration",
        }
    }

    /// Parse a preset from its display id, ignoring case and separators.
    pub fn parse(s: &str) -> std::result::Result<StylePreset, String> {
        let wanted = crate::catalog::normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|style| crate::catalog::normalize(style.id()) == wanted)
            .ok_or_else(|| format!("unknown style preset '{}'", s))
    }

    /// Style fragment appended to the positive prompt.
    pub fn style_suffix(&self) -> &'static str {
        match self {
            Self::Watercolor => {
                ", watercolor painting style, soft brushstrokes, flowing colors, artistic, dreamy"
            }
            Self::Photography => {
                ", professional photography, natural lighting, crisp details, realistic"
            }
            Self::Minimalist => {
                ", minimalist design, clean lines, simple composition, negative space, zen aesthetic"
            }
            Self::SoftIllustration => {
                ", soft digital illustration, gentle colors, smooth gradients, peaceful atmosphere"
            }
        }
    }

    /// Negative-prompt fragment that counteracts this style's failure modes.
    pub fn negative_suffix(&self) -> &'static str {
        match self {
            Self::Watercolor => "harsh lines, digital artifacts, overly sharp, mechanical",
            Self::Photography => "painting, illustration, cartoon, unrealistic, oversaturated",
            Self::Minimalist => "cluttered, busy, complex, ornate, decorative elements",
            Self::SoftIllustration => "photorealistic, harsh shadows, rough textures, aggressive",
        }
    }
}

impl Default for StylePreset {
    fn default() -> Self {
        StylePreset::Minimalist
    }
}
