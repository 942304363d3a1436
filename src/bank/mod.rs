//! Question bank: the embedded questionnaire and externally loaded banks.
//!
//! External banks arrive as already-decoded JSON, either a bare list of
//! questions or an object with a `questions` list (the shape written by
//! [`crate::io::bank_export`]). Loading is tolerant per question and strict
//! per bank:
//!
//! - a question that does not resolve to exactly five options is dropped
//!   with a [`LoadWarning::MalformedQuestion`] and loading continues;
//! - input of the wrong shape, or fewer candidate questions than the
//!   minimum, fails without producing a partial bank.

pub mod defaults;
pub mod normalize;

use crate::core::Question;
use crate::errors::{Error, Result};
use crate::scoring::{Band, BandSet};
use normalize::RawQuestion;
use serde_json::Value;
use std::fmt;

/// Minimum number of questions an external bank must supply
pub const DEFAULT_MIN_QUESTIONS: usize = 10;

/// Ordered, read-only set of questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self {
            questions: defaults::default_questions(),
        }
    }
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Load a bank with the default minimum and drop policy
    pub fn load_from(data: &Value) -> Result<LoadedBank> {
        Self::load_with_options(data, &LoadOptions::default())
    }

    pub fn load_with_options(data: &Value, options: &LoadOptions) -> Result<LoadedBank> {
        let (candidates, states) = extract_candidates(data)?;

        if candidates.len() < options.min_questions {
            return Err(Error::InsufficientQuestions {
                found: candidates.len(),
                required: options.min_questions,
            });
        }

        let mut warnings = Vec::new();
        let questions = normalize_candidates(candidates, &mut warnings);

        if questions.len() < options.min_questions {
            if options.enforce_minimum_after_drop {
                return Err(Error::InsufficientQuestions {
                    found: questions.len(),
                    required: options.min_questions,
                });
            }
            let warning = LoadWarning::BelowMinimum {
                remaining: questions.len(),
                required: options.min_questions,
            };
            log::warn!("{}", warning);
            warnings.push(warning);
        }

        let bands = states.and_then(|value| decode_bands(value, &mut warnings));

        log::debug!(
            "Loaded {} questions ({} warnings)",
            questions.len(),
            warnings.len()
        );

        Ok(LoadedBank {
            bank: QuestionBank::new(questions),
            bands,
            warnings,
        })
    }
}

/// Pure predicate: every question has exactly five options
pub fn validate(bank: &QuestionBank) -> bool {
    bank.questions.iter().all(Question::has_valid_option_count)
}

/// Knobs for [`QuestionBank::load_with_options`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub min_questions: usize,
    /// Re-check the minimum after malformed questions are dropped
    pub enforce_minimum_after_drop: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            min_questions: DEFAULT_MIN_QUESTIONS,
            enforce_minimum_after_drop: false,
        }
    }
}

/// Non-fatal problems found while loading a bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Question did not resolve to exactly five options and was dropped
    MalformedQuestion {
        index: usize,
        prompt: String,
        option_count: usize,
    },
    /// Entry was not a question object and was dropped
    NotAQuestion { index: usize },
    /// Drops left fewer questions than the load minimum
    BelowMinimum { remaining: usize, required: usize },
    /// `psychological_states` could not be used; default bands stay active
    InvalidBands { reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::MalformedQuestion {
                index,
                prompt,
                option_count,
            } => write!(
                f,
                "question {} ('{}') has {} options instead of 5; skipped",
                index + 1,
                prompt,
                option_count
            ),
            LoadWarning::NotAQuestion { index } => {
                write!(f, "entry {} is not a question object; skipped", index + 1)
            }
            LoadWarning::BelowMinimum {
                remaining,
                required,
            } => write!(
                f,
                "only {} usable questions remain after skipping malformed ones (minimum {})",
                remaining, required
            ),
            LoadWarning::InvalidBands { reason } => {
                write!(f, "ignoring psychological states: {}", reason)
            }
        }
    }
}

/// Result of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBank {
    pub bank: QuestionBank,
    /// Band override carried by the bank document, when present and valid
    pub bands: Option<BandSet>,
    pub warnings: Vec<LoadWarning>,
}

// Pure function: locate the question list and optional band list
fn extract_candidates(data: &Value) -> Result<(&[Value], Option<&Value>)> {
    match data {
        Value::Array(items) => Ok((items.as_slice(), None)),
        Value::Object(map) => {
            let states = map.get("psychological_states").filter(|v| !v.is_null());
            match map.get("questions") {
                None | Some(Value::Null) => Ok((&[] as &[Value], states)),
                Some(Value::Array(items)) => Ok((items.as_slice(), states)),
                Some(_) => Err(Error::format("`questions` must be a list")),
            }
        }
        _ => Err(Error::format(
            "expected a list of questions or an object with a `questions` list",
        )),
    }
}

fn normalize_candidates(candidates: &[Value], warnings: &mut Vec<LoadWarning>) -> Vec<Question> {
    let mut questions = Vec::with_capacity(candidates.len());

    for (index, candidate) in candidates.iter().enumerate() {
        let Some(raw) = RawQuestion::from_value(candidate) else {
            let warning = LoadWarning::NotAQuestion { index };
            log::warn!("{}", warning);
            warnings.push(warning);
            continue;
        };

        let question = raw.normalize();
        if question.has_valid_option_count() {
            questions.push(question);
        } else {
            let warning = LoadWarning::MalformedQuestion {
                index,
                option_count: question.options.len(),
                prompt: question.prompt,
            };
            log::warn!("{}", warning);
            warnings.push(warning);
        }
    }

    questions
}

fn decode_bands(value: &Value, warnings: &mut Vec<LoadWarning>) -> Option<BandSet> {
    let decoded = serde_json::from_value::<Vec<Band>>(value.clone())
        .map_err(|e| e.to_string())
        .and_then(BandSet::new);

    match decoded {
        Ok(set) => Some(set),
        Err(reason) => {
            let warning = LoadWarning::InvalidBands { reason };
            log::warn!("{}", warning);
            warnings.push(warning);
            None
        }
    }
}
