//! Observer modules for the URL pipeline.
//!
//! Each module implements [`UrlModule`](crate::hub::UrlModule) and is
//! registered against one session's hub. Siblings such as rewriting or
//! safe-browsing checks would slot in the same way.

mod history;
mod text;

pub use history::HistoryModule;
pub use text::TextModule;
