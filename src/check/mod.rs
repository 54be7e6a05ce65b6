//! Interactive check flow — inspect and edit a URL, then open it.
//!
//! Builds one processing session around the received URL, registers
//! the text and history modules, and drives them from a stdin command
//! loop until the user opens or cancels. User edits enter through the
//! text module's change path, so its suppression flag — not the loop —
//! decides whether a broadcast happens.

mod prompt;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::dispatch;
use crate::hub::ModuleId;
use crate::hub::session::Session;
use crate::modules::{HistoryModule, TextModule};
use prompt::Command;

/// Check flow errors.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

enum Outcome {
    Open,
    Cancel,
}

/// Run one interactive session on `url`.
///
/// Dispatch failure ("no application available") is a user-visible
/// notice and a normal session end, not an error.
pub async fn run(url: String, opener: &str) -> Result<(), CheckError> {
    let mut session = Session::new(url);
    let text_id = session.register(Box::new(TextModule::new()));
    let history_id = session.register(Box::new(HistoryModule::new()));
    session.begin();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let outcome = loop {
        eprintln!("current url: {}", session.current());
        eprintln!("{}", prompt::USAGE);

        // EOF cancels the session.
        let Some(line) = lines.next_line().await? else {
            break Outcome::Cancel;
        };

        match prompt::parse_command(&line) {
            Ok(Command::Edit(text)) => apply_user_edit(&mut session, text_id, &text),
            Ok(Command::History) => print_history(&session, history_id),
            Ok(Command::Open) => break Outcome::Open,
            Ok(Command::Quit) => break Outcome::Cancel,
            Err(hint) => eprintln!("{hint}"),
        }
    };

    match outcome {
        Outcome::Open => {
            let url = session.dispatch();
            if let Err(e) = dispatch::open_url(opener, &url).await {
                tracing::warn!(error = %e, url = %url, "dispatch failed");
                eprintln!("no application available to open the link ({e})");
            } else {
                eprintln!("opened {url}");
            }
        }
        Outcome::Cancel => session.cancel(),
    }

    Ok(())
}

/// Feed a user edit through the text module, broadcasting whatever it
/// chooses to emit. An edit identical to the displayed text emits
/// nothing and nobody is notified.
fn apply_user_edit(session: &mut Session, text_id: ModuleId, text: &str) {
    let emitted = session
        .hub_mut()
        .module_mut::<TextModule>(text_id)
        .and_then(|m| m.user_edit(text));
    if let Some(value) = emitted {
        session.hub_mut().set_url(Some(text_id), &value);
    }
}

fn print_history(session: &Session, history_id: ModuleId) {
    let Some(history) = session.hub().module::<HistoryModule>(history_id) else {
        return;
    };
    for (i, url) in history.entries().iter().enumerate() {
        eprintln!("{:>3}. {url}", i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_modules() -> (Session, ModuleId, ModuleId) {
        let mut session = Session::new("http://example.com");
        let text_id = session.register(Box::new(TextModule::new()));
        let history_id = session.register(Box::new(HistoryModule::new()));
        session.begin();
        (session, text_id, history_id)
    }

    #[test]
    fn begin_primes_text_and_history() {
        let (session, text_id, history_id) = session_with_modules();
        assert_eq!(
            session.hub().module::<TextModule>(text_id).unwrap().text(),
            "http://example.com"
        );
        assert_eq!(
            session
                .hub()
                .module::<HistoryModule>(history_id)
                .unwrap()
                .entries(),
            ["http://example.com"]
        );
    }

    #[test]
    fn user_edit_broadcasts_exactly_once() {
        let (mut session, text_id, history_id) = session_with_modules();

        apply_user_edit(&mut session, text_id, "http://example.com/x");

        assert_eq!(session.current(), "http://example.com/x");
        // History saw the initial value and the single edit — no echo
        // back through the text module, no duplicate broadcast.
        assert_eq!(
            session
                .hub()
                .module::<HistoryModule>(history_id)
                .unwrap()
                .entries(),
            ["http://example.com", "http://example.com/x"]
        );
        assert_eq!(
            session.hub().module::<TextModule>(text_id).unwrap().text(),
            "http://example.com/x"
        );
    }

    #[test]
    fn identical_edit_broadcasts_nothing() {
        let (mut session, text_id, history_id) = session_with_modules();

        apply_user_edit(&mut session, text_id, "http://example.com");

        assert_eq!(
            session
                .hub()
                .module::<HistoryModule>(history_id)
                .unwrap()
                .entries(),
            ["http://example.com"]
        );
    }

    #[test]
    fn dispatched_url_is_the_last_edit() {
        let (mut session, text_id, _) = session_with_modules();
        apply_user_edit(&mut session, text_id, "http://example.com/a");
        apply_user_edit(&mut session, text_id, "http://example.com/b");
        assert_eq!(session.dispatch(), "http://example.com/b");
    }
}
