//! Content series: the weekly mindfulness themes and their prompt
//! enhancement fragments.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Style fragment shared by every series when advanced controls are off.
const SERIES_STYLE_SUFFIX: &str =
    ", minimalist design, soft gradients, peaceful atmosphere, high quality, aesthetic composition, Instagram-ready";

/// Starter prompt ideas surfaced in the UI.
pub const PROMPT_SUGGESTIONS: [&str; 10] = [
    "Inner peace radiating from within",
    "Gratitude for life's simple moments",
    "Breathing deeply, finding calm",
    "Let go of what doesn't serve you",
    "Trust the process of your journey",
    "You are exactly where you need to be",
    "Embrace change as growth",
    "Find joy in present moment",
    "Your thoughts create your reality",
    "Be kind to yourself today",
];

/// A recurring mindfulness content series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSeries {
    #[serde(rename = "Monday Motivation")]
    MondayMotivation,
    #[serde(rename = "Tuesday Thoughts")]
    TuesdayThoughts,
    #[serde(rename = "Wednesday Wisdom")]
    WednesdayWisdom,
    #[serde(rename = "Thursday Therapy")]
    ThursdayTherapy,
    #[serde(rename = "Friday Reflection")]
    FridayReflection,
    #[serde(rename = "Weekend Wellness")]
    WeekendWellness,
    #[serde(rename = "Daily Affirmation")]
    DailyAffirmation,
    #[serde(rename = "Mindful Moment")]
    MindfulMoment,
}

impl ContentSeries {
    /// All series, in display order.
    pub const ALL: [ContentSeries; 8] = [
        ContentSeries::MondayMotivation,
        ContentSeries::TuesdayThoughts,
        ContentSeries::WednesdayWisdom,
        ContentSeries::ThursdayTherapy,
        ContentSeries::FridayReflection,
        ContentSeries::WeekendWellness,
        ContentSeries::DailyAffirmation,
        ContentSeries::MindfulMoment,
    ];

    /// Display id of the series.
    pub fn id(&self) -> &'static str {
        match self {
            Self::MondayMotivation => "Monday Motivation",
            Self::TuesdayThoughts => "Tuesday Thoughts",
            Self::WednesdayWisdom => "Wednesday Wisdom",
            Self::ThursdayTherapy => "Thursday Therapy",
            Self::FridayReflection => "Friday Reflection",
            Self::WeekendWellness => "Weekend Wellness",
            Self::DailyAffirmation => "Daily Affirmation",
            Self::MindfulMoment => "Mindful Moment",
        }
    }

    /// Scene-setting fragment prepended to the user's prompt.
    pub fn prompt_prefix(&self) -> &'static str {
        match self {
            Self::MondayMotivation => {
                "Motivational and energizing scene with warm sunrise colors, representing new beginnings and fresh starts. "
            }
            Self::TuesdayThoughts => {
                "Contemplative and thoughtful atmosphere with soft natural lighting, encouraging deep reflection. "
            }
            Self::WednesdayWisdom => {
                "Wise and serene environment with ancient or timeless elements, conveying knowledge and understanding. "
            }
            Self::ThursdayTherapy => {
                "Healing and nurturing scene with gentle, soothing colors and therapeutic elements. "
            }
            Self::FridayReflection => {
                "Peaceful sunset or twilight scene with calming colors, perfect for weekly reflection. "
            }
            Self::WeekendWellness => {
                "Rejuvenating nature scene with lush greenery and fresh air, promoting wellness and self-care. "
            }
            Self::DailyAffirmation => {
                "Uplifting and positive scene with bright, encouraging colors and symbols of growth. "
            }
            Self::MindfulMoment => {
                "Zen-like minimalist scene with clean lines and calming elements, promoting mindfulness. "
            }
        }
    }

    /// Style fragment appended when no style preset override is active.
    /// Identical across all series.
    pub fn style_suffix(&self) -> &'static str {
        SERIES_STYLE_SUFFIX
    }

    /// Emblem glyph shown next to the series name.
    pub fn emblem(&self) -> &'static str {
        match self {
            Self::MondayMotivation => "\u{1F305}",
            Self::TuesdayThoughts => "\u{1F4AD}",
            Self::WednesdayWisdom => "\u{1F9D8}",
            Self::ThursdayTherapy => "\u{1F338}",
            Self::FridayReflection => "\u{1F319}",
            Self::WeekendWellness => "\u{1F33F}",
            Self::DailyAffirmation => "\u{2728}",
            Self::MindfulMoment => "\u{1F56F}",
        }
    }

    /// Starter prompt preset for this series.
    pub fn suggested_prompt(&self) -> &'static str {
        match self {
            Self::MondayMotivation => "Start this week with renewed energy and purpose",
            Self::TuesdayThoughts => "Take a moment to reflect on your growth",
            Self::WednesdayWisdom => "Ancient wisdom for modern challenges",
            Self::ThursdayTherapy => "Healing begins with self-compassion",
            Self::FridayReflection => "Look back with gratitude, forward with hope",
            Self::WeekendWellness => "Restore your mind, body, and spirit",
            Self::DailyAffirmation => "I am capable of amazing things",
            Self::MindfulMoment => "This moment is all we truly have",
        }
    }

    /// Parse a series from its display id, ignoring case and separators.
    pub fn parse(s: &str) -> std::result::Result<ContentSeries, String> {
        let wanted = crate::catalog::normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|series| crate::catalog::normalize(series.id()) == wanted)
            .ok_or_else(|| format!("unknown series '{}'", s))
    }

    /// Series scheduled for the given calendar date.
    pub fn for_date(date: NaiveDate) -> ContentSeries {
        match date.weekday() {
            Weekday::Mon => Self::MondayMotivation,
            Weekday::Tue => Self::TuesdayThoughts,
            Weekday::Wed => Self::WednesdayWisdom,
            Weekday::Thu => Self::ThursdayTherapy,
            Weekday::Fri => Self::FridayReflection,
            Weekday::Sat | Weekday::Sun => Self::WeekendWellness,
        }
    }
}

impl Default for ContentSeries {
    fn default() -> Self {
        ContentSeries::DailyAffirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_date_weekday_mapping() {
        // 2026-08-17 is a Monday
        let monday = NaiveDate::from_ymd_opt(2026, 8, 17).unwrap();
        assert_eq!(
            ContentSeries::for_date(monday),
            ContentSeries::MondayMotivation
        );
        assert_eq!(
            ContentSeries::for_date(monday + chrono::Days::new(5)),
            ContentSeries::WeekendWellness
        );
        assert_eq!(
            ContentSeries::for_date(monday + chrono::Days::new(6)),
            ContentSeries::WeekendWellness
        );
    }

    #[test]
    fn test_parse_ignores_case_and_separators() {
        assert_eq!(
            ContentSeries::parse("monday-motivation").unwrap(),
            ContentSeries::MondayMotivation
        );
        assert_eq!(
            ContentSeries::parse("Mindful Moment").unwrap(),
            ContentSeries::MindfulMoment
        );
        assert!(ContentSeries::parse("sunday-sads").is_err());
    }

    #[test]
    fn test_prefix_ends_with_separator() {
        for series in ContentSeries::ALL {
            assert!(series.prompt_prefix().ends_with(". "));
        }
    }
}
