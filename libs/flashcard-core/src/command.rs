//! User intents and how they drive a [`Session`].

use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Everything a user can ask the study view to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionCommand {
    Next,
    Previous,
    /// Shuffle when in parse order, restore parse order when shuffled.
    ToggleShuffle,
    /// Show the other side of the card. Presentation only.
    Flip,
    /// Presentation only.
    ToggleFullscreen,
}

impl SessionCommand {
    /// Whether the command only affects how the card is shown.
    pub fn is_presentational(self) -> bool {
        matches!(self, Self::Flip | Self::ToggleFullscreen)
    }
}

/// What applying a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The current position changed.
    Moved,
    /// Navigation was requested past either end of the deck.
    Unchanged,
    /// The active order was shuffled or restored.
    Reordered,
    /// Left for the renderer; the session is untouched.
    Presentation(SessionCommand),
    /// No deck is loaded.
    Ignored,
}

impl CommandOutcome {
    /// Whether a different card is now on display.
    pub fn changed_card(self) -> bool {
        matches!(self, Self::Moved | Self::Reordered)
    }
}

impl Session {
    /// Apply a user command.
    pub fn apply(&mut self, command: SessionCommand) -> CommandOutcome {
        if !self.is_loaded() {
            return CommandOutcome::Ignored;
        }

        let before = self.current_index();
        let outcome = match command {
            SessionCommand::Next => {
                self.next();
                self.moved_from(before)
            }
            SessionCommand::Previous => {
                self.previous();
                self.moved_from(before)
            }
            SessionCommand::ToggleShuffle => {
                if self.is_shuffled() {
                    self.restore_order();
                } else {
                    self.shuffle();
                }
                CommandOutcome::Reordered
            }
            SessionCommand::Flip | SessionCommand::ToggleFullscreen => {
                CommandOutcome::Presentation(command)
            }
        };

        tracing::debug!(?command, ?outcome, index = self.current_index(), "command applied");
        outcome
    }

    fn moved_from(&self, before: usize) -> CommandOutcome {
        if self.current_index() == before {
            CommandOutcome::Unchanged
        } else {
            CommandOutcome::Moved
        }
    }
}
