//! History module — records every URL value observed in the session.

use std::any::Any;

use crate::hub::UrlModule;

/// Keeps the sequence of values the shared URL passed through, oldest
/// first, so the user can review how the link evolved. Never emits.
#[derive(Debug, Default)]
pub struct HistoryModule {
    entries: Vec<String>,
}

impl HistoryModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl UrlModule for HistoryModule {
    fn name(&self) -> &'static str {
        "history"
    }

    fn on_new_url(&mut self, url: &str) -> Option<String> {
        self.entries.push(url.to_string());
        None
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
