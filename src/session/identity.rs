//! Respondent identity fields and their format rules
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s'-]+$").unwrap());

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_STUDENT_ID_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub given_name: String,
    pub surname: String,
    /// `YYYY-MM-DD`
    pub dob: String,
    pub student_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("{field}: only letters, space, - and ' are allowed (at least 2 characters)")]
    InvalidName { field: &'static str },
    #[error("Invalid date of birth '{0}' (expected YYYY-MM-DD, not in the future)")]
    InvalidDob(String),
    #[error("Invalid student ID '{0}' (digits only, at least 5)")]
    InvalidStudentId(String),
    #[error("Duplicate student ID '{0}'")]
    DuplicateStudentId(String),
}

impl Identity {
    pub fn new(
        given_name: impl Into<String>,
        surname: impl Into<String>,
        dob: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            surname: surname.into(),
            dob: dob.into(),
            student_id: student_id.into(),
        }
    }

    /// Check every field's format. Uniqueness is the registry's concern.
    pub fn validate(&self, today: NaiveDate) -> Result<(), IdentityError> {
        if !validate_name(&self.given_name) {
            return Err(IdentityError::InvalidName {
                field: "given_name",
            });
        }
        if !validate_name(&self.surname) {
            return Err(IdentityError::InvalidName { field: "surname" });
        }
        if !validate_dob(&self.dob, today) {
            return Err(IdentityError::InvalidDob(self.dob.clone()));
        }
        if !validate_student_id(&self.student_id) {
            return Err(IdentityError::InvalidStudentId(self.student_id.clone()));
        }
        Ok(())
    }
}

pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();
    NAME_PATTERN.is_match(trimmed) && trimmed.chars().count() >= MIN_NAME_LEN
}

/// A real calendar date no later than `today`
pub fn validate_dob(dob: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d").is_ok_and(|date| date <= today)
}

pub fn validate_student_id(student_id: &str) -> bool {
    student_id.chars().count() >= MIN_STUDENT_ID_LEN
        && student_id.chars().all(|c| c.is_ascii_digit())
}
