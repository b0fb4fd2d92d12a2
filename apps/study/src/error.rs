//! Error handling for the study app

use std::path::PathBuf;

use flashdeck_core::{DeckError, ParseError};
use thiserror::Error;

/// Study app error types
#[derive(Debug, Error)]
pub enum StudyError {
    #[error("Content unavailable at {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Please enter or upload some content first.")]
    NothingEntered,

    #[error("Error: No valid flashcards found")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ParseError> for StudyError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::EmptyInput | ParseError::NotText { .. } => Self::EmptyInput,
        }
    }
}

impl From<DeckError> for StudyError {
    fn from(e: DeckError) -> Self {
        match e {
            DeckError::Empty => Self::EmptyInput,
        }
    }
}

/// Result type alias for study app operations
pub type Result<T> = std::result::Result<T, StudyError>;
