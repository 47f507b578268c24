//! Color types and the HSL to hex conversion used by the palette synthesizer.
//!
//! Provides `Hsl` (hue in degrees, saturation and lightness in percent) and
//! `Srgb` (components in [0, 1]) plus pure conversion functions between them.
//! Uses `f64` throughout so the rounding of each 8-bit channel is reproducible.

use crate::error::PaletteError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip has 8-bit quantization (1/255 precision loss),
/// which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue/saturation/lightness triple.
///
/// `h` is in degrees and may be any real number; it is wrapped modulo 360
/// during conversion. `s` and `l` are percentages, nominally in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `PaletteError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, PaletteError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Returns the 8-bit channels, each clamped to [0, 1] then rounded.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            component_to_u8(self.r),
            component_to_u8(self.g),
            component_to_u8(self.b),
        ]
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Shorthand for `hsl_to_srgb(self).to_hex()`.
    pub fn to_hex(self) -> String {
        hsl_to_srgb(self).to_hex()
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Scales a [0, 1] component to a byte. NaN maps to 0.
fn component_to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Computes one channel of the HSL to RGB conversion.
///
/// `n` is the channel offset on the 12-step hue wheel: 0 for red, 8 for
/// green, 4 for blue. The result is unclamped; out-of-range saturation or
/// lightness may push it outside [0, 1].
fn hsl_channel(c: Hsl, n: f64) -> f64 {
    let l = c.l / 100.0;
    let a = c.s * l.min(1.0 - l) / 100.0;
    let k = (n + c.h / 30.0).rem_euclid(12.0);
    let step = (k - 3.0).min(9.0 - k).min(1.0).clamp(-1.0, 1.0);
    l - a * step
}

/// Converts HSL to sRGB.
///
/// Never fails: inputs outside the nominal ranges still follow the formula,
/// and channels are clamped when quantized by [`Srgb::to_hex`].
pub fn hsl_to_srgb(c: Hsl) -> Srgb {
    Srgb {
        r: hsl_channel(c, 0.0),
        g: hsl_channel(c, 8.0),
        b: hsl_channel(c, 4.0),
    }
}

/// Converts an HSL triple straight to a `"#rrggbb"` string.
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    Hsl::new(hue, saturation, lightness).to_hex()
}
