//! ClipboardProvider trait — system clipboard read abstraction.

use std::time::Duration;

/// Clipboard access errors.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("failed to run clipboard tool: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Reads the system clipboard.
///
/// Platform adapters implement this trait to abstract clipboard
/// access. `Send + Sync` is required because reads may happen from
/// async task contexts.
pub trait ClipboardProvider: Send + Sync {
    /// Read the current clipboard content as text.
    ///
    /// An empty or unreadable selection is `Ok("")`, not an error —
    /// only a failure to reach the clipboard at all is an `Err`.
    fn read(&self) -> Result<String, ClipboardError>;
}

/// Reads the X11 clipboard via `xclip`.
pub struct XclipProvider;

impl ClipboardProvider for XclipProvider {
    /// Runs `xclip -selection clipboard -o`. A non-zero exit means the
    /// selection is empty or non-textual and maps to `Ok("")`; binary
    /// content is coerced to text lossily.
    fn read(&self) -> Result<String, ClipboardError> {
        let output = std::process::Command::new("xclip")
            .args(["-selection", "clipboard", "-o"])
            .output()?;

        if !output.status.success() {
            tracing::debug!(status = %output.status, "xclip reported no readable selection");
            return Ok(String::new());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Wait for clipboard content to become available.
///
/// The clipboard may not be readable immediately after invocation
/// (e.g. launched from a hotkey while focus is still settling), so the
/// read is re-tried up to `retries` times with `interval` between
/// attempts. Once content is non-blank it is returned at once; when
/// the budget runs out the final read's result is returned as-is,
/// blank or not.
pub async fn wait_for_content(
    provider: &dyn ClipboardProvider,
    retries: u32,
    interval: Duration,
) -> Result<String, ClipboardError> {
    let mut attempt = 0;
    loop {
        let result = provider.read();
        let ready = matches!(&result, Ok(text) if !text.trim().is_empty());
        if ready || attempt >= retries {
            return result;
        }
        attempt += 1;
        tracing::debug!(attempt, retries, "clipboard not ready, re-checking");
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Scripted provider: pops one canned result per read, then
    /// repeats the last one.
    struct Scripted {
        reads: Mutex<Vec<Result<String, ClipboardError>>>,
        calls: AtomicU32,
    }

    impl Scripted {
        fn new(reads: Vec<Result<String, ClipboardError>>) -> Self {
            Self {
                reads: Mutex::new(reads),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl ClipboardProvider for Scripted {
        fn read(&self) -> Result<String, ClipboardError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            let mut reads = self.reads.lock().unwrap();
            if reads.len() > 1 {
                reads.remove(0)
            } else {
                match &reads[0] {
                    Ok(s) => Ok(s.clone()),
                    Err(_) => Err(ClipboardError::Spawn(std::io::Error::other("scripted"))),
                }
            }
        }
    }

    fn tick() -> Duration {
        Duration::from_millis(1)
    }

    #[tokio::test]
    async fn content_present_returns_without_retrying() {
        let p = Scripted::new(vec![Ok("http://a".into())]);
        let text = wait_for_content(&p, 50, tick()).await.unwrap();
        assert_eq!(text, "http://a");
        assert_eq!(p.calls(), 1);
    }

    #[tokio::test]
    async fn retries_until_content_appears() {
        let p = Scripted::new(vec![Ok("".into()), Ok("  ".into()), Ok("http://a".into())]);
        let text = wait_for_content(&p, 50, tick()).await.unwrap();
        assert_eq!(text, "http://a");
        assert_eq!(p.calls(), 3);
    }

    #[tokio::test]
    async fn budget_exhausted_proceeds_with_blank_content() {
        let p = Scripted::new(vec![Ok("".into())]);
        let text = wait_for_content(&p, 3, tick()).await.unwrap();
        assert_eq!(text, "");
        // Initial read plus three re-checks.
        assert_eq!(p.calls(), 4);
    }

    #[tokio::test]
    async fn error_on_final_attempt_surfaces() {
        let p = Scripted::new(vec![Err(ClipboardError::Spawn(std::io::Error::other("x")))]);
        let result = wait_for_content(&p, 2, tick()).await;
        assert!(result.is_err());
        assert_eq!(p.calls(), 3);
    }

    #[tokio::test]
    async fn transient_error_then_content() {
        let p = Scripted::new(vec![
            Err(ClipboardError::Spawn(std::io::Error::other("x"))),
            Ok("http://a".into()),
        ]);
        let text = wait_for_content(&p, 5, tick()).await.unwrap();
        assert_eq!(text, "http://a");
    }

    #[tokio::test]
    async fn zero_retries_reads_exactly_once() {
        let p = Scripted::new(vec![Ok("".into())]);
        let text = wait_for_content(&p, 0, tick()).await.unwrap();
        assert_eq!(text, "");
        assert_eq!(p.calls(), 1);
    }
}
