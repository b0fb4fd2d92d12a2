//! Core types for the flashcard deck.

use serde::{Deserialize, Serialize};

/// A single question/answer pair.
///
/// `id` is the numeric label written after `Question:` or, when the label
/// is missing, the card's 1-based segment position. It is only a display
/// hint; two cards may share an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Why a segment produced no card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing but whitespace between two `Question:` markers.
    Blank,
    /// No `Answer:` marker in the segment.
    MissingAnswer,
}

/// A segment the parser dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSegment {
    /// 1-based segment position.
    pub index: usize,
    pub reason: SkipReason,
}

/// Parse output with diagnostics for dropped segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub cards: Vec<Flashcard>,
    pub skipped: Vec<SkippedSegment>,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
