#![deny(unsafe_code)]
//! CLI binary for style-palette.
//!
//! Subcommands:
//! - `questions`: print the questionnaire
//! - `labels`: print the style, mood and temperature tables
//! - `generate`: fold answers into preferences and print palette variants
//! - `hex <h> <s> <l>`: convert one HSL triple
//! - `rgb <hex>`: print the 8-bit channels of a hex color

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use style_palette_core::palette::DEFAULT_VARIANT_COUNT;
use style_palette_core::preferences::{base_hue, saturation_from_mood};
use style_palette_core::{
    answers_from_json, hsl_to_hex, questions, synthesize_variants, Answer, AnswerSheet, ColorScheme,
    Mood, QuestionId, QuestionKind, Srgb, Style, Temperature, UserPreferences,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "style-palette", about = "Questionnaire-driven color palette generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the questionnaire.
    Questions,
    /// Print the style, mood and temperature labels with their table values.
    Labels,
    /// Generate palette variants from answers and/or preference flags.
    Generate {
        /// JSON file with an array of {"questionId", "value"} answers ("-" for stdin).
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Style label (e.g. "自然清新").
        #[arg(long)]
        style: Option<String>,

        /// Mood label; repeat for several moods.
        #[arg(long)]
        mood: Vec<String>,

        /// Brightness on the 1-5 scale.
        #[arg(long)]
        brightness: Option<f64>,

        /// Contrast on the 1-5 scale.
        #[arg(long)]
        contrast: Option<f64>,

        /// Temperature label (e.g. "冷色调（蓝、绿、紫）").
        #[arg(long)]
        temperature: Option<String>,

        /// Complexity on the 1-5 scale.
        #[arg(long)]
        complexity: Option<f64>,

        /// Number of variants to generate.
        #[arg(short = 'n', long, default_value_t = DEFAULT_VARIANT_COUNT)]
        variants: usize,
    },
    /// Convert an HSL triple to a hex color.
    #[command(allow_negative_numbers = true)]
    Hex {
        /// Hue in degrees (wrapped modulo 360).
        hue: f64,
        /// Saturation percent.
        saturation: f64,
        /// Lightness percent.
        lightness: f64,
    },
    /// Print the 8-bit RGB channels of a hex color.
    Rgb {
        /// Color like "#e052e0" or "e052e0".
        color: String,
    },
}

/// Preference flags passed to `generate`. Each one set overrides the file.
struct Overrides {
    style: Option<String>,
    mood: Vec<String>,
    brightness: Option<f64>,
    contrast: Option<f64>,
    temperature: Option<String>,
    complexity: Option<f64>,
}

impl Overrides {
    fn apply(self, sheet: &mut AnswerSheet) {
        if let Some(style) = self.style {
            sheet.record(Answer::text(QuestionId::Style, style));
        }
        if !self.mood.is_empty() {
            sheet.record(Answer::choices(QuestionId::Mood, self.mood));
        }
        if let Some(v) = self.brightness {
            sheet.record(Answer::number(QuestionId::Brightness, v));
        }
        if let Some(v) = self.contrast {
            sheet.record(Answer::number(QuestionId::Contrast, v));
        }
        if let Some(temperature) = self.temperature {
            sheet.record(Answer::text(QuestionId::Temperature, temperature));
        }
        if let Some(v) = self.complexity {
            sheet.record(Answer::number(QuestionId::Complexity, v));
        }
    }
}

fn read_answers(path: &Path) -> Result<Vec<Answer>, CliError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::Io(format!("failed to read answers from stdin: {e}")))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("failed to read {}: {e}", path.display())))?
    };
    Ok(answers_from_json(&text)?)
}

fn print_questions(json: bool) -> Result<(), CliError> {
    let questions = questions();
    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }
    for (i, q) in questions.iter().enumerate() {
        println!("{}. {} [{}]", i + 1, q.text, q.id.as_str());
        match &q.kind {
            QuestionKind::Single { options } => {
                for option in options {
                    println!("   ( ) {option}");
                }
            }
            QuestionKind::Multiple { options } => {
                for option in options {
                    println!("   [ ] {option}");
                }
            }
            QuestionKind::Scale { range } => {
                println!("   {}-{}: {}", range.min, range.max, range.labels.join(" / "));
            }
        }
    }
    Ok(())
}

fn print_labels(json: bool) -> Result<(), CliError> {
    if json {
        let styles = Style::ALL.map(|s| serde_json::json!({"label": s.label(), "hue": s.base_hue()}));
        let moods = Mood::ALL
            .map(|m| serde_json::json!({"label": m.label(), "saturation": m.saturation()}));
        let info = serde_json::json!({
            "styles": styles,
            "moods": moods,
            "temperatures": Temperature::ALL.map(Temperature::label),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }
    println!("Styles (base hue):");
    for s in Style::ALL {
        println!("  {}  {}", s.label(), s.base_hue());
    }
    println!("Moods (saturation):");
    for m in Mood::ALL {
        println!("  {}  {}", m.label(), m.saturation());
    }
    println!("Temperatures:");
    for t in Temperature::ALL {
        println!("  {}", t.label());
    }
    Ok(())
}

fn print_schemes(preferences: &UserPreferences, schemes: &[ColorScheme]) {
    println!("Preferences:");
    println!("  style:       {}", preferences.style);
    println!("  mood:        {}", preferences.mood);
    println!("  brightness:  {}", preferences.brightness);
    println!("  contrast:    {}", preferences.contrast);
    println!("  temperature: {}", preferences.temperature);
    println!("  complexity:  {}", preferences.complexity);
    for (i, scheme) in schemes.iter().enumerate() {
        println!("Scheme {}:", i + 1);
        for (role, hex) in scheme.roles() {
            println!(
                "  {:<10} {}  {} ({})",
                role.as_str(),
                hex,
                role.display_name(),
                role.description()
            );
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Questions => print_questions(cli.json)?,
        Command::Labels => print_labels(cli.json)?,
        Command::Generate {
            answers,
            style,
            mood,
            brightness,
            contrast,
            temperature,
            complexity,
            variants,
        } => {
            let mut sheet: AnswerSheet = match &answers {
                Some(path) => read_answers(path)?.into_iter().collect(),
                None => AnswerSheet::new(),
            };
            Overrides {
                style,
                mood,
                brightness,
                contrast,
                temperature,
                complexity,
            }
            .apply(&mut sheet);

            let preferences = sheet.to_preferences();
            debug!(
                ?preferences,
                hue = base_hue(&preferences.style),
                saturation = saturation_from_mood(&preferences.mood),
                complete = sheet.is_complete(),
                "resolved preferences"
            );
            let schemes = synthesize_variants(&preferences, variants);

            if cli.json {
                let info = serde_json::json!({
                    "preferences": preferences,
                    "schemes": schemes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_schemes(&preferences, &schemes);
            }
        }
        Command::Hex {
            hue,
            saturation,
            lightness,
        } => {
            let hex = hsl_to_hex(hue, saturation, lightness);
            if cli.json {
                let info = serde_json::json!({
                    "hue": hue,
                    "saturation": saturation,
                    "lightness": lightness,
                    "hex": hex,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{hex}");
            }
        }
        Command::Rgb { color } => {
            let [r, g, b] = Srgb::from_hex(&color)?.to_rgb8();
            if cli.json {
                let info = serde_json::json!({"r": r, "g": g, "b": b});
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{r} {g} {b}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
