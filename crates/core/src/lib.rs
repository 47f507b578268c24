#![deny(unsafe_code)]
//! Core types and functions for style-palette.
//!
//! Turns questionnaire answers into five-role color schemes: the
//! questionnaire catalog and answer fold (`questionnaire`), the preference
//! record and its label tables (`preferences`), HSL to hex conversion
//! (`color`), and palette synthesis with variants (`palette`). Everything is
//! a pure function of its inputs.

pub mod color;
pub mod error;
pub mod palette;
pub mod preferences;
pub mod questionnaire;

pub use color::{hsl_to_hex, hsl_to_srgb, Hsl, Srgb};
pub use error::PaletteError;
pub use palette::{
    synthesize_palette, synthesize_variants, variant_preferences, ColorRole, ColorScheme,
    PaletteBasis, DEFAULT_VARIANT_COUNT,
};
pub use preferences::{Mood, Style, Temperature, UserPreferences};
pub use questionnaire::{
    answers_from_json, parse_user_preferences, questions, Answer, AnswerSheet, AnswerValue,
    Question, QuestionId, QuestionKind, ScaleRange,
};
