//! Aspect ratio presets. All dimensions are multiples of 64 within
//! [128, 2048], which the API requires.

use serde::{Deserialize, Serialize};

/// Output aspect ratio preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "9:16")]
    Story,
    #[serde(rename = "16:9")]
    Landscape,
}

impl AspectRatio {
    /// All presets, in display order.
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Square,
        AspectRatio::Portrait,
        AspectRatio::Story,
        AspectRatio::Landscape,
    ];

    /// Ratio id string as shown in the UI and stored in records.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait => "4:5",
            Self::Story => "9:16",
            Self::Landscape => "16:9",
        }
    }

    /// Pixel dimensions `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Square => (1024, 1024),
            Self::Portrait => (832, 1024),
            Self::Story => (576, 1024),
            Self::Landscape => (1024, 576),
        }
    }

    /// Parse a ratio from its name ("square") or id ("1:1").
    pub fn parse(s: &str) -> std::result::Result<AspectRatio, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" | "1:1" => Ok(AspectRatio::Square),
            "portrait" | "4:5" => Ok(AspectRatio::Portrait),
            "story" | "9:16" => Ok(AspectRatio::Story),
            "landscape" | "16:9" => Ok(AspectRatio::Landscape),
            _ => Err(format!("unknown aspect ratio '{}'", s)),
        }
    }

    /// Human-readable name including the pixel dimensions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Square => "Square (1024x1024)",
            Self::Portrait => "Portrait (832x1024)",
            Self::Story => "Story (576x1024)",
            Self::Landscape => "Landscape (1024x576)",
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

/// Check that a dimension satisfies the API constraint: a multiple of 64
/// within [128, 2048].
pub fn dimension_is_valid(value: u32) -> bool {
    (128..=2048).contains(&value) && value % 64 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_dimensions_valid() {
        for ratio in AspectRatio::ALL {
            let (w, h) = ratio.dimensions();
            assert!(dimension_is_valid(w), "{} width {}", ratio.id(), w);
            assert!(dimension_is_valid(h), "{} height {}", ratio.id(), h);
        }
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(!dimension_is_valid(64));
        assert!(dimension_is_valid(128));
        assert!(dimension_is_valid(2048));
        assert!(!dimension_is_valid(2112));
        assert!(!dimension_is_valid(1000));
    }

    #[test]
    fn test_parse_accepts_name_and_id() {
        assert_eq!(AspectRatio::parse("9:16").unwrap(), AspectRatio::Story);
        assert_eq!(
            AspectRatio::parse("LANDSCAPE").unwrap(),
            AspectRatio::Landscape
        );
        assert!(AspectRatio::parse("2:3").is_err());
    }

    #[test]
    fn test_serde_uses_ratio_id() {
        let json = serde_json::to_string(&AspectRatio::Story).unwrap();
        assert_eq!(json, "\"9:16\"");
        let back: AspectRatio = serde_json::from_str("\"16:9\"").unwrap();
        assert_eq!(back, AspectRatio::Landscape);
    }
}
