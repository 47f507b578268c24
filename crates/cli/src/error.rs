//! Errors surfaced by the `style-palette` commands.
//!
//! Synthesis itself cannot fail, so every error here comes from reading or
//! decoding what the user handed in, or from writing JSON back out. Exit codes:
//! - 0:  success
//! - 2:  bad arguments (reported by clap)
//! - 10: `rgb` was given something that is not a `#rrggbb` color
//! - 11: the answers file or stdin could not be read
//! - 12: the answers were read but are not a valid answer list
//! - 13: a result could not be encoded as JSON

use std::fmt;
use style_palette_core::PaletteError;

pub enum CliError {
    /// Rejected color string from `rgb`.
    Color(PaletteError),
    /// Answers source could not be read; carries the path or "stdin".
    Io(String),
    /// Answers JSON that does not decode to `[{questionId, value}]`.
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl From<PaletteError> for CliError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::InvalidColor(_) => CliError::Color(e),
            PaletteError::InvalidAnswers(_) => CliError::Input(e.to_string()),
        }
    }
}

// Decoding goes through `answers_from_json`, so a raw serde_json error here
// can only come from encoding output.
impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
