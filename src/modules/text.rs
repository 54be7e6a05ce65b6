//! Text display/edit module.
//!
//! Shows the current URL in an editable text buffer and forwards user
//! edits to the hub. Programmatic writes go through the same change
//! path a user edit does, so the module suppresses its own change
//! detection with an `edit_by_code` flag while an update from the hub
//! is being applied.

use std::any::Any;

use crate::hub::UrlModule;

/// Two states: idle (user edits are forwarded) and programmatic
/// update (change detection suppressed). See [`TextModule::user_edit`].
#[derive(Debug, Default)]
pub struct TextModule {
    text: String,
    edit_by_code: bool,
}

impl TextModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed text.
    #[allow(dead_code)]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A user edit of the displayed text.
    ///
    /// Returns the value to broadcast — the new text verbatim, exactly
    /// once per content change, no debouncing. Writing text identical
    /// to the buffer fires nothing.
    pub fn user_edit(&mut self, text: &str) -> Option<String> {
        self.set_text(text)
    }

    /// Write the buffer and run the change path, as a text widget
    /// fires its change listener on `setText`.
    fn set_text(&mut self, text: &str) -> Option<String> {
        if self.text == text {
            return None;
        }
        self.text.clear();
        self.text.push_str(text);
        self.after_text_changed()
    }

    fn after_text_changed(&mut self) -> Option<String> {
        if self.edit_by_code {
            return None;
        }
        // New url by the user.
        Some(self.text.clone())
    }
}

impl UrlModule for TextModule {
    fn name(&self) -> &'static str {
        "text"
    }

    fn on_new_url(&mut self, url: &str) -> Option<String> {
        // set_text runs the change path, so disable it manually.
        self.edit_by_code = true;
        let emitted = self.set_text(url);
        self.edit_by_code = false;
        debug_assert!(emitted.is_none());
        None
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
