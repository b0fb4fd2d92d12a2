//! Shared helpers for study app integration tests.

#![allow(dead_code)]

pub mod fixtures;

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, ReadBuf};

use flashdeck_study::config::Config;
use flashdeck_study::config::OutputFormat;

/// Config pointing at `content`, with everything else at defaults.
pub fn config_for(content: impl Into<PathBuf>) -> Config {
    Config {
        content: content.into(),
        swipe_threshold: flashdeck_study::config::DEFAULT_SWIPE_THRESHOLD,
        output: OutputFormat::Text,
        shuffle: false,
    }
}

/// Stdin stand-in that delivers each entry followed by an end of input,
/// like a user pressing Ctrl+D after every paste.
pub struct ScriptedInput {
    entries: VecDeque<Vec<u8>>,
    pending: Option<Vec<u8>>,
}

impl ScriptedInput {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            pending: None,
        }
    }
}

impl AsyncRead for ScriptedInput {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = &mut *self;
        let next = match this.pending.take() {
            // Entry fully delivered: report end of input once.
            Some(rest) if rest.is_empty() => None,
            Some(rest) => Some(rest),
            None => this.entries.pop_front().filter(|e| !e.is_empty()),
        };
        if let Some(chunk) = next {
            let n = chunk.len().min(buf.remaining());
            buf.put_slice(&chunk[..n]);
            this.pending = Some(chunk[n..].to_vec());
        }
        Poll::Ready(Ok(()))
    }
}
