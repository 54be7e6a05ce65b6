//! URL broadcast hub — shared current-URL value and module fan-out.
//!
//! One [`UrlHub`] per processing session. Modules register against it
//! and receive [`UrlModule::on_new_url`] for every change they did not
//! originate. Delivery is synchronous and in registration order; the
//! hub is plain `&mut` state driven from a single task, so there is no
//! locking and no `Sync` bound on modules.

pub mod session;

use std::any::Any;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a registered module.
///
/// Monotonically increasing counter. Used to suppress echo deliveries
/// back to the module that originated a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(u64);

impl ModuleId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// An observer module participating in the URL pipeline.
///
/// Modules display and may mutate the shared URL value. The hub calls
/// [`on_new_url`](Self::on_new_url) for every change a module did not
/// originate; returning `Some(derived)` asks the hub to broadcast a
/// derived value (e.g. a normalized form) on the module's behalf.
/// Returning the value just received would ping-pong — modules are
/// expected to suppress their own change detection during programmatic
/// updates, as [`TextModule`](crate::modules::TextModule) does.
///
/// Neither operation has a failure mode: malformed URLs are opaque
/// text at this layer.
pub trait UrlModule {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Deliver a programmatic update. `Some` requests a follow-up
    /// broadcast of a derived value, attributed to this module.
    fn on_new_url(&mut self, url: &str) -> Option<String>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Upper bound on derived-value rounds drained within one `set_url`.
/// Modules deriving from each other's output must converge well below
/// this; past it the remaining updates are dropped with a warning.
const MAX_CASCADE: usize = 32;

/// The broadcast hub — one shared URL string and its observers.
///
/// Owned by a [`session::Session`] for one receipt-to-dispatch
/// lifetime. Modules are stored in registration order.
pub struct UrlHub {
    current: String,
    modules: Vec<(ModuleId, Box<dyn UrlModule>)>,
}

impl UrlHub {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            modules: Vec::new(),
        }
    }

    /// Register a module. Fan-out order follows registration order.
    pub fn register(&mut self, module: Box<dyn UrlModule>) -> ModuleId {
        let id = ModuleId::new();
        tracing::debug!(?id, module = module.name(), "module registered");
        self.modules.push((id, module));
        id
    }

    /// Remove a module. Idempotent; pending deliveries to a removed
    /// module are silently skipped.
    // No production caller yet — modules currently live for the whole session.
    #[allow(dead_code)]
    pub fn deregister(&mut self, id: ModuleId) {
        self.modules.retain(|(mid, _)| *mid != id);
    }

    /// The current URL value.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Borrow a registered module by id, downcast to its concrete type.
    pub fn module_mut<T: Any>(&mut self, id: ModuleId) -> Option<&mut T> {
        self.modules
            .iter_mut()
            .find(|(mid, _)| *mid == id)
            .and_then(|(_, m)| m.as_any_mut().downcast_mut::<T>())
    }

    /// Borrow a registered module by id (shared).
    pub fn module<T: Any>(&self, id: ModuleId) -> Option<&T> {
        self.modules
            .iter()
            .find(|(mid, _)| *mid == id)
            .and_then(|(_, m)| m.as_any().downcast_ref::<T>())
    }

    /// Accept a new URL value and fan it out.
    ///
    /// Updates the shared value, then invokes `on_new_url` on every
    /// registered module except `origin`, synchronously and in
    /// registration order, before returning. `origin: None` (session
    /// start, external input) delivers to all modules.
    ///
    /// Derived values returned by modules are drained iteratively
    /// within the same call, each round attributed to the deriving
    /// module, so nested updates never recurse. No validation, no
    /// deduplication: setting the value already held still re-delivers.
    pub fn set_url(&mut self, origin: Option<ModuleId>, value: &str) {
        let mut queue: VecDeque<(Option<ModuleId>, String)> = VecDeque::new();
        queue.push_back((origin, value.to_string()));

        let mut rounds = 0;
        while let Some((origin, value)) = queue.pop_front() {
            if rounds == MAX_CASCADE {
                tracing::warn!(
                    dropped = queue.len() + 1,
                    "derived-update cascade exceeded {MAX_CASCADE} rounds, dropping remainder"
                );
                break;
            }
            rounds += 1;

            tracing::debug!(?origin, url = %value, "broadcasting url");
            self.current = value.clone();

            // Snapshot ids: a module may be deregistered between
            // rounds, and deliveries to removed modules are skipped.
            let ids: Vec<ModuleId> = self.modules.iter().map(|(id, _)| *id).collect();
            for id in ids {
                if origin == Some(id) {
                    continue;
                }
                let Some((_, module)) = self.modules.iter_mut().find(|(mid, _)| *mid == id) else {
                    continue;
                };
                if let Some(derived) = module.on_new_url(&value) {
                    tracing::debug!(?id, derived = %derived, "module derived a new value");
                    queue.push_back((Some(id), derived));
                }
            }
        }
    }
}

impl std::fmt::Debug for UrlHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlHub")
            .field("current", &self.current)
            .field("modules", &self.modules.len())
            .finish()
    }
}
