//! Tolerant decoding of externally supplied question banks.
//!
//! Bank files in circulation use several spellings for the same fields and
//! three encodings for options. Each encoding is decoded into [`RawOption`]
//! and then normalized into a uniform [`AnswerOption`].
use crate::core::{AnswerOption, Question};
use serde_json::{Map, Value};

/// Field names accepted for the question prompt, in precedence order
pub const PROMPT_FIELDS: [&str; 3] = ["q", "text", "question"];

/// Field names accepted for the option list, in precedence order
pub const OPTION_FIELDS: [&str; 3] = ["opts", "options", "answers"];

/// Field names accepted for a keyed option's label, in precedence order
pub const LABEL_FIELDS: [&str; 3] = ["text", "answer", "label"];

/// Field names accepted for a keyed option's score, in precedence order
pub const SCORE_FIELDS: [&str; 2] = ["score", "value"];

pub const PLACEHOLDER_PROMPT: &str = "No question";
pub const PLACEHOLDER_LABEL: &str = "???";

/// One option as it appears in a bank file
#[derive(Debug, Clone, PartialEq)]
pub enum RawOption {
    /// `["Never", 0]`
    Pair(Vec<Value>),
    /// `{"text": "Never", "score": 0}`
    Keyed(Map<String, Value>),
    /// `"Never"`
    Bare(Value),
}

impl From<&Value> for RawOption {
    fn from(value: &Value) -> Self {
        match value {
            Value::Array(items) => RawOption::Pair(items.clone()),
            Value::Object(map) => RawOption::Keyed(map.clone()),
            other => RawOption::Bare(other.clone()),
        }
    }
}

impl RawOption {
    pub fn normalize(&self) -> AnswerOption {
        match self {
            RawOption::Pair(items) => normalize_pair(items),
            RawOption::Keyed(map) => normalize_keyed(map),
            RawOption::Bare(value) => AnswerOption::new(render_label(value), 0),
        }
    }
}

fn normalize_pair(items: &[Value]) -> AnswerOption {
    let label = items
        .first()
        .map(render_label)
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string());
    let score = items.get(1).map(resolve_score).unwrap_or(0);
    AnswerOption::new(label, score)
}

fn normalize_keyed(map: &Map<String, Value>) -> AnswerOption {
    let label = first_present(map, &LABEL_FIELDS)
        .map(render_label)
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string());
    let score = first_present(map, &SCORE_FIELDS)
        .map(resolve_score)
        .unwrap_or(0);
    AnswerOption::new(label, score)
}

/// A question entry after field lookup, before option normalization
#[derive(Debug, Clone, PartialEq)]
pub struct RawQuestion {
    pub prompt: String,
    pub options: Vec<RawOption>,
}

impl RawQuestion {
    /// Read a question entry. Returns `None` when the entry is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        let prompt = first_non_empty(map, &PROMPT_FIELDS)
            .map(render_label)
            .unwrap_or_else(|| PLACEHOLDER_PROMPT.to_string());

        let options = match first_non_empty(map, &OPTION_FIELDS) {
            Some(Value::Array(items)) => items.iter().map(RawOption::from).collect(),
            _ => Vec::new(),
        };

        Some(Self { prompt, options })
    }

    pub fn normalize(&self) -> Question {
        Question::new(
            self.prompt.clone(),
            self.options.iter().map(RawOption::normalize).collect(),
        )
    }
}

// Pure function: first candidate field holding a non-empty value
fn first_non_empty<'a>(map: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .filter_map(|field| map.get(*field))
        .find(|value| is_non_empty(value))
}

// Pure function: first candidate field present with a non-null value
fn first_present<'a>(map: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .filter_map(|field| map.get(*field))
        .find(|value| !value.is_null())
}

fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn render_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => PLACEHOLDER_LABEL.to_string(),
        other => other.to_string(),
    }
}

/// Read a score, defaulting to 0 when the value is not an integer in the
/// `i32` range
fn resolve_score(value: &Value) -> i64 {
    let score = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    score
        .and_then(|score| i32::try_from(score).ok())
        .map_or(0, i64::from)
}
