use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of options every question must offer
pub const OPTIONS_PER_QUESTION: usize = 5;

/// Schema version stamped on every result record
pub const SCHEMA_VERSION: f64 = 2.0;

/// One selectable choice for a question.
///
/// Serialized as a `[label, score]` pair, the shape used by exported banks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, i64)", into = "(String, i64)")]
pub struct AnswerOption {
    pub label: String,
    pub score: i64,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, score: i64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

impl From<(String, i64)> for AnswerOption {
    fn from((label, score): (String, i64)) -> Self {
        Self { label, score }
    }
}

impl From<AnswerOption> for (String, i64) {
    fn from(option: AnswerOption) -> Self {
        (option.label, option.score)
    }
}

/// A questionnaire item with its ordered options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "q")]
    pub prompt: String,
    #[serde(rename = "opts")]
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }

    /// Build a question from `(label, score)` literals
    pub fn from_pairs(prompt: &str, pairs: &[(&str, i64)]) -> Self {
        Self::new(
            prompt,
            pairs
                .iter()
                .map(|(label, score)| AnswerOption::new(*label, *score))
                .collect(),
        )
    }

    pub fn has_valid_option_count(&self) -> bool {
        self.options.len() == OPTIONS_PER_QUESTION
    }

    /// Resolve a 1-based selection to its option
    pub fn option_for_choice(&self, choice: usize) -> Option<&AnswerOption> {
        if (1..=OPTIONS_PER_QUESTION).contains(&choice) {
            self.options.get(choice - 1)
        } else {
            None
        }
    }
}

/// A recorded response to one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
    pub score: i64,
}

impl Answer {
    pub fn from_selection(question: &Question, option: &AnswerOption) -> Self {
        Self {
            question: question.prompt.clone(),
            answer: option.label.clone(),
            score: option.score,
        }
    }
}

/// Immutable snapshot of a completed session.
///
/// Field order is the export order for every output format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub given_name: String,
    pub surname: String,
    pub dob: String,
    pub student_id: String,
    pub total_score: i64,
    pub result: String,
    pub answers: Vec<Answer>,
    #[serde(with = "survey_date_format")]
    pub survey_date: NaiveDateTime,
    pub version: f64,
}

impl ResultRecord {
    /// Scalar fields in export order, rendered as text. `answers` is
    /// returned separately because each writer expands it differently.
    pub fn scalar_fields_before_answers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("given_name", self.given_name.clone()),
            ("surname", self.surname.clone()),
            ("dob", self.dob.clone()),
            ("student_id", self.student_id.clone()),
            ("total_score", self.total_score.to_string()),
            ("result", self.result.clone()),
        ]
    }

    pub fn scalar_fields_after_answers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("survey_date", survey_date_format::render(&self.survey_date)),
            ("version", format_version(self.version)),
        ]
    }
}

/// Render a schema version with at least one decimal place (`2.0`, not `2`)
pub fn format_version(version: f64) -> String {
    if version.fract() == 0.0 {
        format!("{version:.1}")
    } else {
        version.to_string()
    }
}

/// Local ISO-8601 timestamp with microsecond precision.
///
/// The fraction is left out when it is zero, as Python's `isoformat` does.
pub mod survey_date_format {
    use chrono::{NaiveDateTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    const FORMAT_WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn render(date: &NaiveDateTime) -> String {
        if date.nanosecond() / 1_000 == 0 {
            date.format(FORMAT_WHOLE_SECONDS).to_string()
        } else {
            date.format(FORMAT).to_string()
        }
    }

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&render(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(serde::de::Error::custom)
    }
}
