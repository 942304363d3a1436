//! One respondent's traversal of a question bank.
//!
//! ```text
//! CollectingIdentity --identity accepted--> Answering(0)
//! Answering(i)       --valid selection----> Answering(i + 1)
//! Answering(n - 1)   --valid selection----> Completed
//! ```
//!
//! Invalid selections leave the state untouched; the driver re-prompts as
//! often as needed. `Completed` is terminal. Scoring and classification run
//! once, on entry to `Completed`.

pub mod identity;
pub mod registry;

pub use identity::{Identity, IdentityError};
pub use registry::{IdRegistry, InMemoryIdRegistry};

use crate::bank::QuestionBank;
use crate::core::{Answer, Question, ResultRecord, OPTIONS_PER_QUESTION, SCHEMA_VERSION};
use crate::scoring::{self, BandSet};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    CollectingIdentity,
    Answering(usize),
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::CollectingIdentity => write!(f, "collecting identity"),
            SessionState::Answering(index) => write!(f, "answering question {}", index + 1),
            SessionState::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Enter a number between 1-{max} (got {choice})")]
    InvalidSelection { choice: usize, max: usize },
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("cannot {action} while {state}")]
    WrongState {
        action: &'static str,
        state: SessionState,
    },
}

/// What the driver should do after a valid selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Present the question at this index next
    Next(usize),
    Completed,
}

/// Total and band name, fixed when the session completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub total: i64,
    pub band: String,
}

pub struct Session<'a> {
    bank: &'a QuestionBank,
    bands: &'a BandSet,
    state: SessionState,
    identity: Option<Identity>,
    answers: Vec<Answer>,
    outcome: Option<Outcome>,
}

impl<'a> Session<'a> {
    pub fn new(bank: &'a QuestionBank, bands: &'a BandSet) -> Self {
        Self {
            bank,
            bands,
            state: SessionState::CollectingIdentity,
            identity: None,
            answers: Vec::with_capacity(bank.len()),
            outcome: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// Accept the respondent's identity and start answering.
    ///
    /// The student id is added to `registry` only when every check passes.
    pub fn submit_identity(
        &mut self,
        identity: Identity,
        registry: &mut dyn IdRegistry,
        today: NaiveDate,
    ) -> Result<SessionState, SessionError> {
        if self.state != SessionState::CollectingIdentity {
            return Err(SessionError::WrongState {
                action: "submit identity",
                state: self.state,
            });
        }

        identity.validate(today)?;
        if registry.contains(&identity.student_id) {
            return Err(IdentityError::DuplicateStudentId(identity.student_id).into());
        }

        registry.add(identity.student_id.clone());
        log::debug!("Identity accepted for student {}", identity.student_id);
        self.identity = Some(identity);

        if self.bank.is_empty() {
            self.complete();
        } else {
            self.state = SessionState::Answering(0);
        }
        Ok(self.state)
    }

    /// The question awaiting an answer, with its index
    pub fn current_question(&self) -> Option<(usize, &'a Question)> {
        match self.state {
            SessionState::Answering(index) => self.bank.get(index).map(|q| (index, q)),
            _ => None,
        }
    }

    /// Record a 1-based option selection for the current question
    pub fn select(&mut self, choice: usize) -> Result<Progress, SessionError> {
        let Some((index, question)) = self.current_question() else {
            return Err(SessionError::WrongState {
                action: "select an option",
                state: self.state,
            });
        };

        let option = question
            .option_for_choice(choice)
            .ok_or(SessionError::InvalidSelection {
                choice,
                max: OPTIONS_PER_QUESTION,
            })?;

        self.answers.push(Answer::from_selection(question, option));

        let next = index + 1;
        if next < self.bank.len() {
            self.state = SessionState::Answering(next);
            Ok(Progress::Next(next))
        } else {
            self.complete();
            Ok(Progress::Completed)
        }
    }

    fn complete(&mut self) {
        let total = scoring::total(&self.answers);
        let classification = self.bands.classify(total);
        if classification.is_unknown() {
            log::warn!("Total score {} matches no band", total);
        }
        self.outcome = Some(Outcome {
            total,
            band: classification.name().to_string(),
        });
        self.state = SessionState::Completed;
    }

    /// Assemble the result record of a completed session
    pub fn into_record(self, survey_date: NaiveDateTime) -> Result<ResultRecord, SessionError> {
        let (Some(identity), Some(outcome)) = (self.identity, self.outcome) else {
            return Err(SessionError::WrongState {
                action: "build a result record",
                state: self.state,
            });
        };

        Ok(ResultRecord {
            given_name: identity.given_name,
            surname: identity.surname,
            dob: identity.dob,
            student_id: identity.student_id,
            total_score: outcome.total,
            result: outcome.band,
            answers: self.answers,
            survey_date,
            version: SCHEMA_VERSION,
        })
    }
}
