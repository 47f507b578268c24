//! Error types for the style-palette core.
//!
//! Palette synthesis itself never fails. Errors only arise at the parsing
//! edges: hex color strings and questionnaire answers decoded from JSON.

use thiserror::Error;

/// Errors produced while parsing inputs to the core.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A list of questionnaire answers could not be decoded.
    #[error("invalid answers: {0}")]
    InvalidAnswers(String),
}

impl From<serde_json::Error> for PaletteError {
    fn from(e: serde_json::Error) -> Self {
        PaletteError::InvalidAnswers(e.to_string())
    }
}
