//! Renderers turn frames into terminal output.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use serde_json::json;

use crate::app::Frame;
use crate::error::Result;

const BAR_WIDTH: usize = 30;
const EMPTY_MESSAGE: &str = "Error: No valid flashcards found";
const EMPTY_HINT: &str = "Please check your content format and try again.";

pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Shown when the content produced no cards.
    fn render_empty(&mut self) -> Result<()>;
}

/// Card view as plain text.
pub struct TextRenderer<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, raw: false }
    }

    /// Clear the screen before each frame and use `\r\n` line endings, as
    /// needed once the terminal is in raw mode.
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let newline = if self.raw { "\r\n" } else { "\n" };
        if self.raw {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        for line in lines {
            write!(self.out, "{line}{newline}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.write_lines(&frame_lines(frame))
    }

    fn render_empty(&mut self) -> Result<()> {
        self.write_lines(&[EMPTY_MESSAGE.to_string(), EMPTY_HINT.to_string()])
    }
}

/// Lay out one frame.
pub fn frame_lines(frame: &Frame<'_>) -> Vec<String> {
    let view = &frame.view;
    let mut heading = format!("Card {} of {}", view.position, view.total);
    if frame.shuffled {
        heading.push_str(" (shuffled)");
    }

    let mut lines = vec![heading, progress_bar(view.progress_percent()), String::new()];
    lines.extend(frame.visible_text().lines().map(str::to_string));
    lines.push(String::new());
    lines.push(format!("{}/{}", view.position, view.total));

    if !frame.fullscreen {
        let prev = if view.is_first { "      " } else { "← prev" };
        let next = if view.is_last { "      " } else { "next →" };
        lines.push(format!(
            "{prev}  {next}  [space] flip  [s] shuffle  [f] fullscreen  [q] quit"
        ));
    }
    lines
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// One JSON object per frame, for driving another front end.
pub struct JsonRenderer<W: Write> {
    out: W,
    newline: &'static str,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, newline: "\n" }
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.newline = if raw { "\r\n" } else { "\n" };
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_value(&mut self, value: &impl serde::Serialize) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        write!(self.out, "{}", self.newline)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        let value = json!({
            "frame": frame,
            "progress_percent": frame.view.progress_percent(),
        });
        self.write_value(&value)
    }

    fn render_empty(&mut self) -> Result<()> {
        self.write_value(&json!({ "error": "no_flashcards", "message": EMPTY_MESSAGE }))
    }
}
