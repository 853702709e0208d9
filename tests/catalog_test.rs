//! Tests for the static model/series/style/ratio catalogs

use chrono::NaiveDate;
use poster_engine::catalog::ratios::dimension_is_valid;
use poster_engine::catalog::{AspectRatio, ContentSeries, GenerationModel, StylePreset};
use poster_engine::error::AppError;

#[test]
fn test_all_ratio_dimensions_satisfy_api_constraint() {
    for ratio in AspectRatio::ALL {
        let (w, h) = ratio.dimensions();
        assert!(dimension_is_valid(w), "{}: width {}", ratio.id(), w);
        assert!(dimension_is_valid(h), "{}: height {}", ratio.id(), h);
    }
}

#[test]
fn test_model_lookup_known_and_unknown() {
    assert_eq!(
        GenerationModel::lookup("civitai:81458@132760").unwrap(),
        GenerationModel::AbsoluteReality
    );
    assert!(matches!(
        GenerationModel::lookup("stability:1@1"),
        Err(AppError::UnknownModel(_))
    ));
}

#[test]
fn test_display_name_falls_back_to_raw_id() {
    assert_eq!(
        GenerationModel::display_name_for("google:4@1"),
        "Gemini Flash Image 25"
    );
    assert_eq!(GenerationModel::display_name_for("mystery:9@9"), "mystery:9@9");
}

#[test]
fn test_capability_flags() {
    assert!(!GenerationModel::GeminiFlashImage.supports_dimensions());
    assert!(!GenerationModel::GeminiFlashImage.supports_steps());
    assert!(!GenerationModel::GeminiFlashImage.supports_cfg_scale());

    for model in [
        GenerationModel::RealisticVision,
        GenerationModel::DreamShaper,
        GenerationModel::SdxlBase,
        GenerationModel::AbsoluteReality,
    ] {
        assert!(model.supports_dimensions(), "{}", model.id());
        assert!(model.supports_steps(), "{}", model.id());
        assert!(model.supports_cfg_scale(), "{}", model.id());
    }
}

#[test]
fn test_default_sampling_settings() {
    assert_eq!(GenerationModel::DreamShaper.default_settings(), (20, 7.5));
    assert_eq!(GenerationModel::SdxlBase.default_settings(), (25, 4.0));
    assert_eq!(GenerationModel::AbsoluteReality.default_settings(), (30, 6.5));
}

#[test]
fn test_series_catalog_is_complete() {
    assert_eq!(ContentSeries::ALL.len(), 8);
    for series in ContentSeries::ALL {
        assert!(!series.prompt_prefix().is_empty());
        assert!(!series.suggested_prompt().is_empty());
        assert!(!series.emblem().is_empty());
    }
}

#[test]
fn test_series_weekday_schedule() {
    // 2026-08-19 is a Wednesday
    let wednesday = NaiveDate::from_ymd_opt(2026, 8, 19).unwrap();
    assert_eq!(
        ContentSeries::for_date(wednesday),
        ContentSeries::WednesdayWisdom
    );
    let sunday = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
    assert_eq!(
        ContentSeries::for_date(sunday),
        ContentSeries::WeekendWellness
    );
}

#[test]
fn test_style_presets_pair_suffixes() {
    assert_eq!(StylePreset::ALL.len(), 4);
    for style in StylePreset::ALL {
        assert!(style.style_suffix().starts_with(", "));
        assert!(!style.negative_suffix().is_empty());
    }
}

#[test]
fn test_stored_ids_round_trip_through_serde() {
    for series in ContentSeries::ALL {
        let json = serde_json::to_string(&series).unwrap();
        let back: ContentSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);
    }
    for model in GenerationModel::ALL {
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, format!("\"{}\"", model.id()));
    }
}
