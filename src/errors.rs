//! Shared error types for the questionnaire engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for apathymeter operations
#[derive(Debug, Error)]
pub enum Error {
    /// Bank data is neither a list of questions nor an object holding one
    #[error("Invalid question bank format: {0}")]
    Format(String),

    /// Too few usable questions in an externally supplied bank
    #[error("Number of questions should be at least {required}, found {found}")]
    InsufficientQuestions { found: usize, required: usize },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Whether the driver may recover by falling back to the embedded bank
    pub fn is_bank_fallback(&self) -> bool {
        matches!(
            self,
            Self::Format(_)
                | Self::InsufficientQuestions { .. }
                | Self::FileSystem { .. }
                | Self::Json(_)
        )
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
