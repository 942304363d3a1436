// Export modules for library usage
pub mod bank;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::bank::{validate, LoadOptions, LoadWarning, LoadedBank, QuestionBank};
pub use crate::core::{Answer, AnswerOption, Question, ResultRecord};
pub use crate::errors::{Error, Result};
pub use crate::io::{create_writer, OutputFormat, ResultWriter};
pub use crate::scoring::{classify, default_bands, total, Band, BandSet, Classification};
pub use crate::session::{
    IdRegistry, Identity, IdentityError, InMemoryIdRegistry, Progress, Session, SessionError,
    SessionState,
};
