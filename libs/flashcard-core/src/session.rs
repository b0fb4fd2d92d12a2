//! Study session state: deck order, position and progress.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::error::DeckError;
use crate::types::Flashcard;

/// Read-only projection of the session for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardView<'a> {
    pub card: &'a Flashcard,
    /// 1-based position in the active order.
    pub position: usize,
    pub total: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl CardView<'_> {
    /// Share of the deck reached so far, in percent.
    pub fn progress_percent(&self) -> f64 {
        self.position as f64 / self.total as f64 * 100.0
    }
}

/// A deck being studied.
///
/// `active` always holds the same cards as `original`, possibly in another
/// order; both vectors share the card allocations.
#[derive(Debug, Clone, Default)]
pub struct Session {
    original: Vec<Arc<Flashcard>>,
    active: Vec<Arc<Flashcard>>,
    current_index: usize,
    is_shuffled: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the deck. An empty deck leaves the current state untouched.
    pub fn load(&mut self, cards: Vec<Flashcard>) -> Result<(), DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        self.original = cards.into_iter().map(Arc::new).collect();
        self.active = self.original.clone();
        self.current_index = 0;
        self.is_shuffled = false;
        tracing::info!(cards = self.original.len(), "deck loaded");
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_shuffled(&self) -> bool {
        self.is_shuffled
    }

    /// Cards in display order.
    pub fn active(&self) -> &[Arc<Flashcard>] {
        &self.active
    }

    /// Cards in parse order.
    pub fn original(&self) -> &[Arc<Flashcard>] {
        &self.original
    }

    /// Advance to the next card; stays put on the last one.
    pub fn next(&mut self) -> Option<CardView<'_>> {
        if self.current_index + 1 < self.active.len() {
            self.current_index += 1;
        }
        self.current_view()
    }

    /// Go back one card; stays put on the first one.
    pub fn previous(&mut self) -> Option<CardView<'_>> {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
        self.current_view()
    }

    /// Shuffle the active order using the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Fisher-Yates shuffle of the active order, then return to the first card.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.active.len()).rev() {
            let j = rng.random_range(0..=i);
            self.active.swap(i, j);
        }
        self.current_index = 0;
        self.is_shuffled = true;
        tracing::debug!(cards = self.active.len(), "deck shuffled");
    }

    /// Put the cards back in parse order and return to the first card.
    pub fn restore_order(&mut self) {
        self.active = self.original.clone();
        self.current_index = 0;
        self.is_shuffled = false;
    }

    /// The card at the current position, or `None` before anything is loaded.
    pub fn current_view(&self) -> Option<CardView<'_>> {
        let card = self.active.get(self.current_index)?;
        let total = self.active.len();
        Some(CardView {
            card,
            position: self.current_index + 1,
            total,
            is_first: self.current_index == 0,
            is_last: self.current_index + 1 == total,
        })
    }
}
