//! Clipboard flow — detect links on the clipboard and check one.
//!
//! Reads the clipboard (with a bounded-retry wait for it to become
//! readable), extracts candidate links, then: zero links is a notice
//! and nothing more; one link goes straight into the check session;
//! several links get a numbered chooser.

mod provider;

pub use provider::{ClipboardError, ClipboardProvider, XclipProvider, wait_for_content};

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{check, links};

/// Clipboard flow errors.
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Check(#[from] check::CheckError),
}

/// Run the clipboard flow.
pub async fn run(wait_retries: u32, wait_interval_ms: u64, opener: &str) -> Result<(), PickError> {
    let clipboard = XclipProvider;
    let text = wait_for_content(
        &clipboard,
        wait_retries,
        Duration::from_millis(wait_interval_ms),
    )
    .await?;

    let links = links::extract_links(&text);
    tracing::info!(count = links.len(), "links detected on clipboard");

    match links.len() {
        0 => {
            eprintln!("no links detected");
            Ok(())
        }
        1 => {
            let link = links.into_iter().next().expect("one link");
            check::run(link, opener).await.map_err(Into::into)
        }
        _ => match choose_link(&links).await? {
            Some(index) => {
                let link = links.into_iter().nth(index).expect("chosen link in range");
                check::run(link, opener).await.map_err(Into::into)
            }
            None => {
                eprintln!("cancelled");
                Ok(())
            }
        },
    }
}

/// Numbered chooser on stdin. `None` means the user cancelled (bad
/// input or EOF).
async fn choose_link(links: &[String]) -> Result<Option<usize>, PickError> {
    for (i, link) in links.iter().enumerate() {
        eprintln!("{:>3}. {link}", i + 1);
    }
    eprintln!("open which link? [1-{}]", links.len());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let Some(line) = lines.next_line().await? else {
        return Ok(None);
    };
    Ok(parse_choice(&line, links.len()))
}

/// Parse a 1-based selection into an index. Anything out of range or
/// non-numeric is a cancel.
fn parse_choice(line: &str, count: usize) -> Option<usize> {
    let n: usize = line.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_in_range() {
        assert_eq!(parse_choice("1", 3), Some(0));
        assert_eq!(parse_choice(" 3 ", 3), Some(2));
    }

    #[test]
    fn choice_out_of_range_cancels() {
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
    }

    #[test]
    fn non_numeric_choice_cancels() {
        assert_eq!(parse_choice("", 3), None);
        assert_eq!(parse_choice("x", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
    }
}
