pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod source;
pub mod terminal;

use std::io::IsTerminal;

use clap::Parser;
use flashdeck_core::SessionCommand;
use tokio::io::AsyncRead;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::StudyApp;
use crate::config::Config;
use crate::error::StudyError;
use crate::render::{Renderer, TextRenderer};
use crate::source::{fetch_primary, read_manual_entry, ContentEvent};

const MANUAL_ENTRY_PROMPT: &str = "Paste flashcard content, then press Ctrl+D to load.

Format example:
Question: 1
What is the capital of France?
Answer: Paris is the capital of France.
";

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut app = StudyApp::new();
    let interactive = std::io::stdin().is_terminal();
    load_content(&mut app, &config, &mut tokio::io::stdin(), interactive).await?;

    if config.shuffle {
        app.handle(SessionCommand::ToggleShuffle);
    }

    tracing::info!(cards = app.session().len(), "starting study session");
    let output = config.output;
    let swipe_threshold = config.swipe_threshold;
    tokio::task::spawn_blocking(move || terminal::run(app, output, swipe_threshold)).await??;

    Ok(())
}

/// Load the default content, falling back to manual entry from `input`.
///
/// When `retry` is set, manual entry is offered again after blank input or
/// content without any valid card.
pub async fn load_content<R>(
    app: &mut StudyApp,
    config: &Config,
    input: &mut R,
    retry: bool,
) -> Result<usize, StudyError>
where
    R: AsyncRead + Unpin,
{
    if let ContentEvent::Ready(text) = fetch_primary(&config.content).await {
        match app.load_text(&text) {
            Ok(count) => return Ok(count),
            Err(err) => {
                tracing::warn!(path = %config.content.display(), error = %err, "no flashcards in content file");
            }
        }
    }

    let mut notice = TextRenderer::new(std::io::stderr());
    loop {
        eprintln!("{MANUAL_ENTRY_PROMPT}");
        let loaded = read_manual_entry(input)
            .await
            .and_then(|text| app.load_text(&text));
        match loaded {
            Ok(count) => return Ok(count),
            Err(StudyError::EmptyInput) if retry => notice.render_empty()?,
            Err(err @ StudyError::NothingEntered) if retry => eprintln!("{err}"),
            Err(err) => return Err(err),
        }
    }
}
