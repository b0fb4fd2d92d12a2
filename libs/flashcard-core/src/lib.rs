//! Core flashcard library for the study app.
//!
//! Provides:
//! - Text parser for `Question:` / `Answer:` content
//! - Study session state machine (position, shuffle, restore)
//! - The closed set of user commands that drive a session
//! - Shared types (Flashcard, ParseReport, etc.)

pub mod command;
pub mod error;
pub mod parser;
pub mod session;
pub mod types;

pub use command::{CommandOutcome, SessionCommand};
pub use error::{DeckError, ParseError, Result};
pub use parser::{parse, parse_bytes, parse_deck, parse_deck_bytes, parse_with_report};
pub use session::{CardView, Session};
pub use types::{Flashcard, ParseReport, SkipReason, SkippedSegment};
