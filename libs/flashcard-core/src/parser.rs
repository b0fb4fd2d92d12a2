//! Text parser for flashcard content.
//!
//! # Format
//! ```text
//! Question: 1
//! What is the capital of France?
//! Answer: Paris is the capital of France.
//!
//! Question: 2
//! What is the largest planet in our solar system?
//! Answer: Jupiter is the largest planet.
//! Multiple lines are supported.
//! ```
//!
//! Both markers are case-sensitive and must be followed by whitespace.
//! Anything before the first `Question:` is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::types::{Flashcard, ParseReport, SkipReason, SkippedSegment};

static QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Question:\s+").expect("question marker pattern"));
static ANSWER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Answer:\s+").expect("answer marker pattern"));
static LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+").expect("label pattern"));

const QUESTION_PREFIX: &str = "Question: ";

/// Parse content into flashcards.
///
/// Never fails: empty input, or input with no well-formed segment, yields
/// an empty deck.
pub fn parse(content: &str) -> Vec<Flashcard> {
    parse_deck(content).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "content produced no flashcards");
        Vec::new()
    })
}

/// Parse raw bytes, treating anything that is not UTF-8 text as empty.
pub fn parse_bytes(content: &[u8]) -> Vec<Flashcard> {
    parse_deck_bytes(content).unwrap_or_default()
}

/// Parse content, reporting an error when no card could be produced.
pub fn parse_deck(content: &str) -> Result<Vec<Flashcard>> {
    let report = parse_with_report(content);
    if report.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(report.cards)
}

/// Strict variant of [`parse_bytes`].
pub fn parse_deck_bytes(content: &[u8]) -> Result<Vec<Flashcard>> {
    let text = std::str::from_utf8(content).map_err(|e| ParseError::NotText {
        valid_up_to: e.valid_up_to(),
    })?;
    parse_deck(text)
}

/// Parse content and keep track of every segment that was dropped.
pub fn parse_with_report(content: &str) -> ParseReport {
    let mut report = ParseReport::default();
    if content.is_empty() {
        return report;
    }

    // Segment 0 is preamble, so enumerate() already yields 1-based positions.
    for (index, segment) in QUESTION_MARKER.split(content).enumerate().skip(1) {
        match parse_segment(segment, index) {
            Ok(card) => report.cards.push(card),
            Err(reason) => {
                tracing::debug!(index, ?reason, "skipping segment");
                report.skipped.push(SkippedSegment { index, reason });
            }
        }
    }

    report
}

fn parse_segment(segment: &str, index: usize) -> std::result::Result<Flashcard, SkipReason> {
    let section = segment.trim();
    if section.is_empty() {
        return Err(SkipReason::Blank);
    }

    let label = LABEL.find(section).map(|m| m.as_str());
    let id = label.map_or_else(|| index.to_string(), str::to_string);

    let mut parts = ANSWER_MARKER.splitn(section, 3);
    let (Some(question), Some(answer)) = (parts.next(), parts.next()) else {
        return Err(SkipReason::MissingAnswer);
    };

    let question = question_body(question.trim(), label);

    Ok(Flashcard {
        id,
        question: format!("{QUESTION_PREFIX}{question}"),
        answer: answer.trim().to_string(),
    })
}

/// Drop the label line from the question text when the label stands alone
/// on the first line.
fn question_body<'a>(question: &'a str, label: Option<&str>) -> &'a str {
    let Some(label) = label else {
        return question;
    };

    match question.split_once('\n') {
        Some((first, rest)) if first.trim_end() == label => rest.trim(),
        _ => question,
    }
}
