//! Five-role color schemes synthesized from user preferences.
//!
//! A [`PaletteBasis`] holds the hue, saturation, lightness and contrast
//! derived from a [`UserPreferences`] record. Each [`ColorRole`] then picks
//! its own HSL from the basis with a fixed rule, and the HSL is encoded as a
//! `#rrggbb` string. Nothing here is random, so identical preferences always
//! give identical hex strings.

use crate::color::Hsl;
use crate::preferences::{
    adjust_hue_for_temperature, base_hue, saturation_from_mood, UserPreferences,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of variants produced when the caller does not ask for a count.
pub const DEFAULT_VARIANT_COUNT: usize = 3;

/// Brightness change per variant index away from the center.
pub const VARIANT_BRIGHTNESS_STEP: f64 = 0.5;

/// Contrast change per variant index away from the center.
pub const VARIANT_CONTRAST_STEP: f64 = 0.3;

/// Variant index that reproduces the unperturbed preferences.
pub const CENTER_VARIANT: usize = 1;

const SCALE_MIN: f64 = 1.0;
const SCALE_MAX: f64 = 5.0;

/// The five roles of a color scheme, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ColorRole {
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Text,
    ];

    /// Field name, as used in serialized schemes.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Text => "text",
        }
    }

    /// Name shown next to a swatch.
    pub fn display_name(self) -> &'static str {
        match self {
            ColorRole::Primary => "主色",
            ColorRole::Secondary => "辅助色",
            ColorRole::Accent => "强调色",
            ColorRole::Background => "背景色",
            ColorRole::Text => "文字色",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ColorRole::Primary => "主要品牌色彩",
            ColorRole::Secondary => "辅助装饰色彩",
            ColorRole::Accent => "重点突出色彩",
            ColorRole::Background => "背景基础色彩",
            ColorRole::Text => "文字内容色彩",
        }
    }
}

/// A five-role palette of `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl ColorScheme {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Text => &self.text,
        }
    }

    /// Each role paired with its hex string, in display order.
    pub fn roles(&self) -> [(ColorRole, &str); 5] {
        ColorRole::ALL.map(|role| (role, self.get(role)))
    }
}

/// Intermediate values derived once per preference record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteBasis {
    /// Style hue after the temperature adjustment, in degrees.
    pub hue: f64,
    /// Mood saturation, possibly averaged over several moods.
    pub saturation: f64,
    /// `30 + (brightness - 1) * 15`, not yet clamped.
    pub lightness: f64,
    /// `contrast / 3`.
    pub contrast_multiplier: f64,
    /// 15 for dim preferences (brightness at most 2), otherwise 95.
    pub background_lightness: f64,
    /// Whether the temperature is the neutral-tone option.
    pub neutral: bool,
}

impl PaletteBasis {
    pub fn from_preferences(preferences: &UserPreferences) -> Self {
        let hue =
            adjust_hue_for_temperature(base_hue(&preferences.style), &preferences.temperature);
        Self {
            hue,
            saturation: saturation_from_mood(&preferences.mood),
            lightness: 30.0 + (preferences.brightness - 1.0) * 15.0,
            contrast_multiplier: preferences.contrast / 3.0,
            background_lightness: if preferences.brightness <= 2.0 { 15.0 } else { 95.0 },
            neutral: preferences.is_neutral(),
        }
    }

    /// HSL for one role of the scheme.
    pub fn role_hsl(&self, role: ColorRole) -> Hsl {
        match role {
            ColorRole::Primary => Hsl::new(
                self.hue,
                (self.saturation * self.contrast_multiplier).min(100.0),
                self.lightness.clamp(20.0, 80.0),
            ),
            ColorRole::Secondary => Hsl::new(
                (self.hue + 180.0).rem_euclid(360.0),
                (self.saturation * 0.8).min(100.0),
                (self.lightness + 20.0).clamp(30.0, 70.0),
            ),
            ColorRole::Accent => Hsl::new(
                (self.hue + 120.0).rem_euclid(360.0),
                (self.saturation * 1.2).min(100.0),
                (self.lightness - 10.0).clamp(40.0, 60.0),
            ),
            ColorRole::Background => Hsl::new(
                self.hue,
                if self.neutral { 0.0 } else { 10.0 },
                self.background_lightness,
            ),
            // Always on the opposite end of the scale from the background.
            ColorRole::Text => Hsl::new(
                0.0,
                0.0,
                if self.background_lightness > 50.0 { 20.0 } else { 90.0 },
            ),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme {
            primary: self.role_hsl(ColorRole::Primary).to_hex(),
            secondary: self.role_hsl(ColorRole::Secondary).to_hex(),
            accent: self.role_hsl(ColorRole::Accent).to_hex(),
            background: self.role_hsl(ColorRole::Background).to_hex(),
            text: self.role_hsl(ColorRole::Text).to_hex(),
        }
    }
}

/// Derives one color scheme from a preference record.
pub fn synthesize_palette(preferences: &UserPreferences) -> ColorScheme {
    let basis = PaletteBasis::from_preferences(preferences);
    let scheme = basis.scheme();
    trace!(?basis, ?scheme, "synthesized palette");
    scheme
}

/// Preference record for the variant at `index`.
///
/// Brightness moves by 0.5 and contrast by 0.3 per step away from
/// [`CENTER_VARIANT`], both clamped to [1, 5]. Other fields are copied.
pub fn variant_preferences(preferences: &UserPreferences, index: usize) -> UserPreferences {
    let offset = index as f64 - CENTER_VARIANT as f64;
    UserPreferences {
        brightness: (preferences.brightness + offset * VARIANT_BRIGHTNESS_STEP)
            .clamp(SCALE_MIN, SCALE_MAX),
        contrast: (preferences.contrast + offset * VARIANT_CONTRAST_STEP)
            .clamp(SCALE_MIN, SCALE_MAX),
        ..preferences.clone()
    }
}

/// Derives `count` schemes, one per variant index, in index order.
///
/// Index 0 is dimmer with less contrast, [`CENTER_VARIANT`] is the
/// preferences as given (when brightness and contrast are already within
/// [1, 5]) and higher indices are brighter with more contrast.
pub fn synthesize_variants(preferences: &UserPreferences, count: usize) -> Vec<ColorScheme> {
    (0..count)
        .map(|i| synthesize_palette(&variant_preferences(preferences, i)))
        .collect()
}
