//! The style questionnaire and the fold from answers to [`UserPreferences`].
//!
//! The catalog is fixed: six questions, each single choice, multiple choice
//! or a 1-5 scale. Answers are recorded last-write-wins per question id and
//! folded into one preference record. The fold never fails; answers it cannot
//! use are skipped with a warning and the field keeps its default.

use crate::error::PaletteError;
use crate::preferences::{join_moods, Mood, Style, Temperature, UserPreferences};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifier of a questionnaire question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Style,
    Mood,
    Brightness,
    Contrast,
    Temperature,
    Complexity,
}

impl QuestionId {
    /// All ids in questionnaire order.
    pub const ALL: [QuestionId; 6] = [
        QuestionId::Style,
        QuestionId::Mood,
        QuestionId::Brightness,
        QuestionId::Contrast,
        QuestionId::Temperature,
        QuestionId::Complexity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::Style => "style",
            QuestionId::Mood => "mood",
            QuestionId::Brightness => "brightness",
            QuestionId::Contrast => "contrast",
            QuestionId::Temperature => "temperature",
            QuestionId::Complexity => "complexity",
        }
    }

    pub fn from_id(id: &str) -> Option<QuestionId> {
        QuestionId::ALL.into_iter().find(|q| q.as_str() == id)
    }
}

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Pick exactly one option.
    Single { options: Vec<&'static str> },
    /// Pick one or more options.
    Multiple { options: Vec<&'static str> },
    /// Pick a point on an inclusive numeric scale.
    Scale {
        #[serde(rename = "scaleRange")]
        range: ScaleRange,
    },
}

/// Bounds of a scale question; `labels` name each point from `min` up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleRange {
    pub min: u8,
    pub max: u8,
    pub labels: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// Whether `value` is a well-formed answer to this question.
    pub fn accepts(&self, value: &AnswerValue) -> bool {
        match (&self.kind, value) {
            (QuestionKind::Single { options }, AnswerValue::Text(t)) => {
                options.iter().any(|o| *o == t.as_str())
            }
            (QuestionKind::Multiple { options }, AnswerValue::Choices(items)) => {
                !items.is_empty()
                    && items
                        .iter()
                        .all(|i| options.iter().any(|o| *o == i.as_str()))
            }
            (QuestionKind::Scale { range }, AnswerValue::Number(n)) => {
                (f64::from(range.min)..=f64::from(range.max)).contains(n)
            }
            _ => false,
        }
    }
}

fn scale(min: u8, max: u8, labels: [&'static str; 5]) -> QuestionKind {
    QuestionKind::Scale {
        range: ScaleRange {
            min,
            max,
            labels: labels.to_vec(),
        },
    }
}

/// The questionnaire, in the order it is asked.
pub fn questions() -> Vec<Question> {
    vec![
        Question {
            id: QuestionId::Style,
            text: "你更喜欢哪种设计风格？",
            kind: QuestionKind::Single {
                options: Style::ALL.map(Style::label).to_vec(),
            },
        },
        Question {
            id: QuestionId::Mood,
            text: "你希望这个配色给人什么感觉？",
            kind: QuestionKind::Multiple {
                options: Mood::ALL.map(Mood::label).to_vec(),
            },
        },
        Question {
            id: QuestionId::Brightness,
            text: "你偏好的亮度如何？",
            kind: scale(1, 5, ["很暗", "较暗", "适中", "较亮", "很亮"]),
        },
        Question {
            id: QuestionId::Contrast,
            text: "你希望颜色对比度如何？",
            kind: scale(1, 5, ["很低", "较低", "适中", "较高", "很高"]),
        },
        Question {
            id: QuestionId::Temperature,
            text: "你更偏向哪种色调？",
            kind: QuestionKind::Single {
                options: Temperature::ALL.map(Temperature::label).to_vec(),
            },
        },
        Question {
            id: QuestionId::Complexity,
            text: "你希望配色方案的复杂程度如何？",
            kind: scale(1, 5, ["极简", "简单", "适中", "丰富", "复杂"]),
        },
    ]
}

/// Looks up one question of the catalog.
pub fn question(id: QuestionId) -> Question {
    // Catalog order matches the QuestionId discriminants.
    questions().swap_remove(id as usize)
}

/// Value of a single answer: one option, several options, or a scale point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Choices(Vec<String>),
}

impl AnswerValue {
    fn shape(&self) -> &'static str {
        match self {
            AnswerValue::Number(_) => "number",
            AnswerValue::Text(_) => "text",
            AnswerValue::Choices(_) => "list",
        }
    }
}

/// One recorded answer. The id is kept as text so unknown ids survive decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
}

impl Answer {
    pub fn text(id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            question_id: id.as_str().to_owned(),
            value: AnswerValue::Text(text.into()),
        }
    }

    pub fn choices<I, S>(id: QuestionId, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question_id: id.as_str().to_owned(),
            value: AnswerValue::Choices(choices.into_iter().map(Into::into).collect()),
        }
    }

    pub fn number(id: QuestionId, value: f64) -> Self {
        Self {
            question_id: id.as_str().to_owned(),
            value: AnswerValue::Number(value),
        }
    }
}

/// Answers collected so far, at most one per question id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer to the same question.
    ///
    /// The newest answer is always last.
    pub fn record(&mut self, answer: Answer) {
        self.answers.retain(|a| a.question_id != answer.question_id);
        self.answers.push(answer);
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == id.as_str())
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    /// True once every catalog question has an answer.
    pub fn is_complete(&self) -> bool {
        QuestionId::ALL.into_iter().all(|id| self.is_answered(id))
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn to_preferences(&self) -> UserPreferences {
        parse_user_preferences(&self.answers)
    }
}

impl FromIterator<Answer> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut sheet = AnswerSheet::new();
        for answer in iter {
            sheet.record(answer);
        }
        sheet
    }
}

fn skip(answer: &Answer, expected: &str) {
    warn!(
        question_id = %answer.question_id,
        expected,
        got = answer.value.shape(),
        "skipping answer with unexpected value"
    );
}

/// Folds answers, in order, into a preference record.
///
/// Starts from [`UserPreferences::default`]; a later answer to the same
/// question overwrites an earlier one. Multiple-choice moods are joined with
/// the mood separator. Unknown ids and mistyped values are skipped.
pub fn parse_user_preferences(answers: &[Answer]) -> UserPreferences {
    let mut prefs = UserPreferences::default();
    for answer in answers {
        let Some(id) = QuestionId::from_id(&answer.question_id) else {
            warn!(question_id = %answer.question_id, "skipping answer to unknown question");
            continue;
        };
        match (id, &answer.value) {
            (QuestionId::Style, AnswerValue::Text(t)) => prefs.style = t.clone(),
            (QuestionId::Temperature, AnswerValue::Text(t)) => prefs.temperature = t.clone(),
            (QuestionId::Mood, AnswerValue::Text(t)) => prefs.mood = t.clone(),
            (QuestionId::Mood, AnswerValue::Choices(items)) => {
                prefs.mood = join_moods(items.iter().map(String::as_str));
            }
            (QuestionId::Brightness, AnswerValue::Number(n)) => prefs.brightness = *n,
            (QuestionId::Contrast, AnswerValue::Number(n)) => prefs.contrast = *n,
            (QuestionId::Complexity, AnswerValue::Number(n)) => prefs.complexity = *n,
            (QuestionId::Style | QuestionId::Temperature, _) => skip(answer, "text"),
            (QuestionId::Mood, _) => skip(answer, "text or list"),
            (QuestionId::Brightness | QuestionId::Contrast | QuestionId::Complexity, _) => {
                skip(answer, "number")
            }
        }
    }
    prefs
}

/// Decodes a JSON array of `{"questionId": ..., "value": ...}` objects.
pub fn answers_from_json(json: &str) -> Result<Vec<Answer>, PaletteError> {
    Ok(serde_json::from_str(json)?)
}
