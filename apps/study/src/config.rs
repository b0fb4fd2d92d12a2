//! Command line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Default drag distance, in terminal columns, that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 10;

/// How frames are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable card view.
    #[default]
    Text,
    /// One JSON object per frame.
    Json,
}

/// Study a deck of flashcards in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "flashdeck", version, about)]
pub struct Config {
    /// Content file loaded at startup. When it cannot be read, content is
    /// read from stdin instead.
    #[arg(long, env = "FLASHDECK_CONTENT", default_value = "content.md")]
    pub content: PathBuf,

    /// Mouse drag distance that counts as a swipe.
    #[arg(long, env = "FLASHDECK_SWIPE_THRESHOLD", default_value_t = DEFAULT_SWIPE_THRESHOLD)]
    pub swipe_threshold: u16,

    #[arg(long, env = "FLASHDECK_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Start with the deck shuffled.
    #[arg(long, env = "FLASHDECK_SHUFFLE")]
    pub shuffle: bool,
}
