//! Where flashcard content comes from.
//!
//! The default content file is tried first. When it is missing or blank
//! the user is asked to paste content instead.

use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{Result, StudyError};

/// Outcome of trying the default content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    /// Text is available for parsing.
    Ready(String),
    /// Nothing usable; fall back to manual entry.
    NoContent,
}

/// Read the default content file.
pub async fn fetch_primary(path: &Path) -> ContentEvent {
    match read_file(path).await {
        Ok(text) if !text.trim().is_empty() => {
            tracing::info!(path = %path.display(), bytes = text.len(), "content loaded");
            ContentEvent::Ready(text)
        }
        Ok(_) => {
            tracing::warn!(path = %path.display(), "content file is blank");
            ContentEvent::NoContent
        }
        Err(err) => {
            tracing::warn!(error = %err, "falling back to manual entry");
            ContentEvent::NoContent
        }
    }
}

async fn read_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| StudyError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    String::from_utf8(bytes).map_err(|e| StudyError::SourceUnavailable {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}

/// Read pasted content until end of input.
pub async fn read_manual_entry<R>(reader: &mut R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;

    let text = text.trim();
    if text.is_empty() {
        return Err(StudyError::NothingEntered);
    }
    Ok(text.to_string())
}
