//! Static catalogs: generation models, content series, style presets, and
//! aspect ratio presets. All data here is fixed at compile time.

pub mod models;
pub mod ratios;
pub mod series;
pub mod styles;

pub use models::GenerationModel;
pub use ratios::AspectRatio;
pub use series::ContentSeries;
pub use styles::StylePreset;

/// Lowercase a name and strip separators so "monday-motivation",
/// "Monday Motivation", and "mondaymotivation" all compare equal.
pub(crate) fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}
