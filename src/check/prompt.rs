//! Prompt-line parsing for the interactive check loop.

/// Commands accepted at the check prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the displayed URL with the given text.
    Edit(String),
    /// Show the values the URL has passed through.
    History,
    /// Dispatch the current URL to the external handler.
    Open,
    /// Cancel the session.
    Quit,
}

pub const USAGE: &str = "commands: edit <url> | history | open | quit (e/h/o/q)";

/// Parse one prompt line. `Err` carries the hint to show the user.
pub fn parse_command(line: &str) -> Result<Command, &'static str> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };

    match keyword {
        "e" | "edit" => {
            if rest.is_empty() {
                Err("edit needs a url: edit <url>")
            } else {
                Ok(Command::Edit(rest.to_string()))
            }
        }
        "h" | "history" if rest.is_empty() => Ok(Command::History),
        "o" | "open" if rest.is_empty() => Ok(Command::Open),
        "q" | "quit" if rest.is_empty() => Ok(Command::Quit),
        _ => Err(USAGE),
    }
}
