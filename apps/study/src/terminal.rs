//! Interactive terminal loop.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::app::StudyApp;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::input::{event_intent, Intent, SwipeTracker};
use crate::render::{JsonRenderer, Renderer, TextRenderer};

/// Raw mode and mouse capture for as long as the guard lives.
struct TerminalGuard {
    stdout: Stdout,
    alternate: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnableMouseCapture)?;
        Ok(Self {
            stdout,
            alternate: false,
        })
    }

    /// Fullscreen is the alternate screen.
    fn set_fullscreen(&mut self, on: bool) -> Result<()> {
        if on == self.alternate {
            return Ok(());
        }
        if on {
            execute!(self.stdout, EnterAlternateScreen)?;
        } else {
            execute!(self.stdout, LeaveAlternateScreen)?;
        }
        self.alternate = on;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.alternate {
            let _ = execute!(self.stdout, LeaveAlternateScreen);
        }
        let _ = execute!(self.stdout, DisableMouseCapture);
        let _ = disable_raw_mode();
    }
}

/// Run the study loop until the user quits.
pub fn run(app: StudyApp, output: OutputFormat, swipe_threshold: u16) -> Result<()> {
    match output {
        OutputFormat::Text => run_with(app, TextRenderer::new(io::stdout()).raw(true), swipe_threshold),
        OutputFormat::Json => run_with(app, JsonRenderer::new(io::stdout()).raw(true), swipe_threshold),
    }
}

fn run_with<R: Renderer>(mut app: StudyApp, mut renderer: R, swipe_threshold: u16) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut swipe = SwipeTracker::new(swipe_threshold);
    draw(&app, &mut renderer)?;

    loop {
        let event = event::read()?;
        if let Event::Resize(..) = event {
            draw(&app, &mut renderer)?;
            continue;
        }

        match event_intent(event, &mut swipe) {
            Some(Intent::Quit) => return Ok(()),
            Some(Intent::Command(command)) => {
                if app.handle(command) {
                    guard.set_fullscreen(app.is_fullscreen())?;
                    draw(&app, &mut renderer)?;
                }
            }
            None => {}
        }
    }
}

fn draw<R: Renderer>(app: &StudyApp, renderer: &mut R) -> Result<()> {
    match app.frame() {
        Some(frame) => renderer.render(&frame),
        None => renderer.render_empty(),
    }
}
