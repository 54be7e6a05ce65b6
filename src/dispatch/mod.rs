//! Final dispatch — hand the chosen URL to the external handler.
//!
//! The handler program (`xdg-open` by default) receives the URL as its
//! single argument with stdio nulled. Failure here is reported to the
//! user as a transient notice by the calling flow, not treated as a
//! process failure.

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

/// Dispatch errors.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to launch {opener}: {source}")]
    Launch {
        opener: String,
        source: std::io::Error,
    },
    #[error("{opener} exited with {status}")]
    Handler { opener: String, status: ExitStatus },
}

/// Open `url` with the external handler program `opener`.
pub async fn open_url(opener: &str, url: &str) -> Result<(), DispatchError> {
    let status = Command::new(opener)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|source| DispatchError::Launch {
            opener: opener.to_string(),
            source,
        })?;

    if status.success() {
        tracing::info!(opener, url, "url dispatched");
        Ok(())
    } else {
        Err(DispatchError::Handler {
            opener: opener.to_string(),
            status,
        })
    }
}
