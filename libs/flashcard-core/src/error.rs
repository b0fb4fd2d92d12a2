//! Error types for flashdeck-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors produced by the strict parser entry points.
///
/// The lenient [`crate::parser::parse`] never returns these; it maps every
/// failure to an empty deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no valid flashcards found")]
    EmptyInput,

    #[error("content is not valid UTF-8 text (at byte {valid_up_to})")]
    NotText { valid_up_to: usize },
}

/// Errors from session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot load an empty deck")]
    Empty,
}
