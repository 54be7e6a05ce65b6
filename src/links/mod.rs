//! Web-link extraction from free text.
//!
//! Scans arbitrary text (typically clipboard content) for things that
//! look like web URLs: `http://`/`https://` links plus bare `www.`
//! hosts. Deliberately permissive — a match is a candidate for the
//! pipeline, not a validated URL.

use std::sync::OnceLock;

use regex::Regex;

/// Candidate web-URL pattern. Scheme'd URLs or `www.`-prefixed hosts,
/// running to the next whitespace or quote/bracket character.
const WEB_URL: &str = r#"(?i)\b(?:https?://|www\.)[^\s<>"'`]+"#;

/// Punctuation that ends a sentence rather than a URL.
const TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

fn web_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WEB_URL).expect("web url pattern is valid"))
}

/// Return all links detected in `text`, in order of appearance.
///
/// Trailing sentence punctuation is trimmed from each match. No
/// deduplication: a link pasted twice is offered twice.
pub fn extract_links(text: &str) -> Vec<String> {
    web_url_regex()
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING).to_string())
        .filter(|link| !link.is_empty())
        .collect()
}
