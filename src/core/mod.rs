//! Questionnaire data model shared by the bank, scoring and session layers

pub mod types;

pub use types::{
    format_version, survey_date_format, Answer, AnswerOption, Question, ResultRecord,
    OPTIONS_PER_QUESTION, SCHEMA_VERSION,
};
