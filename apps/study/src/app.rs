//! Study app state: the session plus what only the view cares about.

use flashdeck_core::{parse_deck, CardView, CommandOutcome, Session, SessionCommand};
use serde::Serialize;

use crate::error::Result;

/// Everything a renderer needs for one screen.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Frame<'a> {
    #[serde(flatten)]
    pub view: CardView<'a>,
    /// Answer side showing.
    pub flipped: bool,
    pub fullscreen: bool,
    pub shuffled: bool,
}

impl Frame<'_> {
    /// Text on the side currently facing the user.
    pub fn visible_text(&self) -> &str {
        if self.flipped {
            &self.view.card.answer
        } else {
            &self.view.card.question
        }
    }
}

#[derive(Debug, Default)]
pub struct StudyApp {
    session: Session,
    flipped: bool,
    fullscreen: bool,
}

impl StudyApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Parse content and start studying it. On failure the previous deck,
    /// if any, stays loaded.
    pub fn load_text(&mut self, text: &str) -> Result<usize> {
        let cards = parse_deck(text)?;
        let count = cards.len();
        self.session.load(cards)?;
        self.flipped = false;
        Ok(count)
    }

    /// Apply a command. Returns whether the screen needs redrawing.
    pub fn handle(&mut self, command: SessionCommand) -> bool {
        match self.session.apply(command) {
            CommandOutcome::Moved | CommandOutcome::Reordered => {
                self.flipped = false;
                true
            }
            CommandOutcome::Presentation(SessionCommand::Flip) => {
                self.flipped = !self.flipped;
                true
            }
            CommandOutcome::Presentation(SessionCommand::ToggleFullscreen) => {
                self.fullscreen = !self.fullscreen;
                true
            }
            CommandOutcome::Presentation(_)
            | CommandOutcome::Unchanged
            | CommandOutcome::Ignored => false,
        }
    }

    pub fn frame(&self) -> Option<Frame<'_>> {
        self.session.current_view().map(|view| Frame {
            view,
            flipped: self.flipped,
            fullscreen: self.fullscreen,
            shuffled: self.session.is_shuffled(),
        })
    }
}
