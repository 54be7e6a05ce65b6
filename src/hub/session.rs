//! Processing session — one hub from URL receipt to dispatch.
//!
//! A [`Session`] is created when a candidate URL arrives, carries the
//! hub while modules inspect and edit the value, and is consumed by
//! [`Session::dispatch`] or [`Session::cancel`]. The shared URL value
//! does not outlive it.

use super::{ModuleId, UrlHub, UrlModule};

#[derive(Debug)]
pub struct Session {
    hub: UrlHub,
}

impl Session {
    /// Start a session holding `initial`. Nothing is broadcast until
    /// [`begin`](Self::begin) — register modules first.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            hub: UrlHub::new(initial),
        }
    }

    pub fn register(&mut self, module: Box<dyn UrlModule>) -> ModuleId {
        self.hub.register(module)
    }

    /// Broadcast the initial value to all registered modules.
    pub fn begin(&mut self) {
        tracing::info!(url = %self.hub.current(), "session started");
        let initial = self.hub.current().to_string();
        self.hub.set_url(None, &initial);
    }

    pub fn current(&self) -> &str {
        self.hub.current()
    }

    pub fn hub_mut(&mut self) -> &mut UrlHub {
        &mut self.hub
    }

    pub fn hub(&self) -> &UrlHub {
        &self.hub
    }

    /// End the session, yielding the final URL for dispatch.
    pub fn dispatch(self) -> String {
        tracing::info!(url = %self.hub.current(), "session dispatched");
        self.hub.current
    }

    /// End the session, discarding the value.
    pub fn cancel(self) {
        tracing::info!(url = %self.hub.current(), "session cancelled");
    }
}
