//! The reduced preference record and the label tables that drive synthesis.
//!
//! Each questionnaire option is a fixed Chinese label. `Style`, `Mood` and
//! `Temperature` name those labels and carry the numbers the synthesizer
//! derives from them. The free functions in this module are total: any text
//! that is not a known label falls back to a documented default.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base hue used when the style is missing or unrecognized.
pub const DEFAULT_BASE_HUE: f64 = 210.0;

/// Saturation used for a mood that is missing or unrecognized.
pub const DEFAULT_MOOD_SATURATION: f64 = 50.0;

/// Scale value a numeric question takes when unanswered.
pub const DEFAULT_SCALE_VALUE: f64 = 3.0;

/// Separator used when several moods are stored in one text field.
pub const MOOD_SEPARATOR: &str = ",";

/// Overall design style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    ModernMinimal,
    ClassicElegant,
    Fashionable,
    NaturalFresh,
    Industrial,
}

impl Style {
    /// All styles in questionnaire order.
    pub const ALL: [Style; 5] = [
        Style::ModernMinimal,
        Style::ClassicElegant,
        Style::Fashionable,
        Style::NaturalFresh,
        Style::Industrial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Style::ModernMinimal => "现代简约",
            Style::ClassicElegant => "经典优雅",
            Style::Fashionable => "活力时尚",
            Style::NaturalFresh => "自然清新",
            Style::Industrial => "工业风格",
        }
    }

    pub fn from_label(label: &str) -> Option<Style> {
        Style::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Hue in degrees that this style starts from.
    pub fn base_hue(self) -> f64 {
        match self {
            Style::ModernMinimal => 210.0,
            Style::ClassicElegant => 280.0,
            Style::Fashionable => 340.0,
            Style::NaturalFresh => 120.0,
            Style::Industrial => 0.0,
        }
    }
}

/// Feeling the palette should convey. Several may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Calm,
    Energetic,
    Professional,
    Friendly,
    Mysterious,
    Fresh,
}

impl Mood {
    /// All moods in questionnaire order.
    pub const ALL: [Mood; 6] = [
        Mood::Calm,
        Mood::Energetic,
        Mood::Professional,
        Mood::Friendly,
        Mood::Mysterious,
        Mood::Fresh,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Calm => "平静放松",
            Mood::Energetic => "充满活力",
            Mood::Professional => "专业可靠",
            Mood::Friendly => "温暖友好",
            Mood::Mysterious => "神秘高级",
            Mood::Fresh => "清新自然",
        }
    }

    pub fn from_label(label: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|m| m.label() == label)
    }

    /// Saturation percentage associated with this mood.
    pub fn saturation(self) -> f64 {
        match self {
            Mood::Calm => 30.0,
            Mood::Energetic => 80.0,
            Mood::Professional => 50.0,
            Mood::Friendly => 60.0,
            Mood::Mysterious => 40.0,
            Mood::Fresh => 70.0,
        }
    }
}

/// Color temperature preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
    Mixed,
}

impl Temperature {
    /// All temperatures in questionnaire order.
    pub const ALL: [Temperature; 4] = [
        Temperature::Warm,
        Temperature::Cool,
        Temperature::Neutral,
        Temperature::Mixed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Temperature::Warm => "暖色调（红、橙、黄）",
            Temperature::Cool => "冷色调（蓝、绿、紫）",
            Temperature::Neutral => "中性色调（灰、白、黑）",
            Temperature::Mixed => "混合色调",
        }
    }

    pub fn from_label(label: &str) -> Option<Temperature> {
        Temperature::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Applies this temperature to a hue in degrees.
    ///
    /// Warm rotates by 30, cool by 180, neutral forces hue 0 and mixed leaves
    /// the hue alone.
    pub fn adjust_hue(self, hue: f64) -> f64 {
        match self {
            Temperature::Warm => (hue + 30.0).rem_euclid(360.0),
            Temperature::Cool => (hue + 180.0).rem_euclid(360.0),
            Temperature::Neutral => 0.0,
            Temperature::Mixed => hue,
        }
    }
}

/// Questionnaire answers reduced to one value per question.
///
/// Text fields keep the raw option labels so that unrecognized values survive
/// the fold and fall back to defaults at synthesis time. `mood` holds every
/// selected mood label joined with [`MOOD_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    pub style: String,
    pub mood: String,
    pub brightness: f64,
    pub contrast: f64,
    pub temperature: String,
    pub complexity: f64,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            style: String::new(),
            mood: String::new(),
            brightness: DEFAULT_SCALE_VALUE,
            contrast: DEFAULT_SCALE_VALUE,
            temperature: String::new(),
            complexity: DEFAULT_SCALE_VALUE,
        }
    }
}

impl UserPreferences {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style.label().to_owned();
        self
    }

    /// Stores the given moods as separator-joined labels, in order.
    pub fn with_moods(mut self, moods: &[Mood]) -> Self {
        self.mood = join_moods(moods.iter().map(|m| m.label()));
        self
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature.label().to_owned();
        self
    }

    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_complexity(mut self, complexity: f64) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn style_kind(&self) -> Option<Style> {
        Style::from_label(&self.style)
    }

    pub fn temperature_kind(&self) -> Option<Temperature> {
        Temperature::from_label(&self.temperature)
    }

    /// Parses the mood text into one entry per selected label.
    ///
    /// Unrecognized labels appear as `None` so callers can tell them apart
    /// from an empty selection.
    pub fn moods(&self) -> Vec<Option<Mood>> {
        if self.mood.is_empty() {
            return Vec::new();
        }
        self.mood
            .split(MOOD_SEPARATOR)
            .map(|m| Mood::from_label(m.trim()))
            .collect()
    }

    /// True when the temperature is the neutral-tone option.
    pub fn is_neutral(&self) -> bool {
        self.temperature_kind() == Some(Temperature::Neutral)
    }
}

/// Joins mood labels with [`MOOD_SEPARATOR`].
pub fn join_moods<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels.into_iter().collect::<Vec<_>>().join(MOOD_SEPARATOR)
}

/// Base hue for a style label, or [`DEFAULT_BASE_HUE`] when unrecognized.
pub fn base_hue(style: &str) -> f64 {
    match Style::from_label(style) {
        Some(s) => s.base_hue(),
        None => {
            debug!(style, default = DEFAULT_BASE_HUE, "unrecognized style, using default hue");
            DEFAULT_BASE_HUE
        }
    }
}

/// Adjusts a hue by a temperature label. Unrecognized labels leave it unchanged.
pub fn adjust_hue_for_temperature(hue: f64, temperature: &str) -> f64 {
    match Temperature::from_label(temperature) {
        Some(t) => t.adjust_hue(hue),
        None => {
            debug!(temperature, "unrecognized temperature, hue unchanged");
            hue
        }
    }
}

fn mood_saturation(label: &str) -> f64 {
    match Mood::from_label(label) {
        Some(m) => m.saturation(),
        None => {
            debug!(
                mood = label,
                default = DEFAULT_MOOD_SATURATION,
                "unrecognized mood, using default saturation"
            );
            DEFAULT_MOOD_SATURATION
        }
    }
}

/// Base saturation for a mood text.
///
/// Separator-joined text averages the saturation of each trimmed label, with
/// [`DEFAULT_MOOD_SATURATION`] standing in for unknown ones. A single label is
/// looked up as is.
pub fn saturation_from_mood(mood: &str) -> f64 {
    if !mood.contains(MOOD_SEPARATOR) {
        return mood_saturation(mood);
    }
    let (sum, count) = mood
        .split(MOOD_SEPARATOR)
        .map(|m| mood_saturation(m.trim()))
        .fold((0.0, 0usize), |(sum, n), s| (sum + s, n + 1));
    sum / count as f64
}
