//! Theme context: the dark-mode flag plus its subscriber set
//!
//! A [`ThemeContext`] is shareable (`Arc`) so several engines can watch
//! the same flag. The flag itself is only mutated through an engine
//! (`StyleEngine::set_dark_mode`), which clears its cache before
//! subscribers run; subscriber panics are caught and logged so one bad
//! listener never aborts the rest of the notification pass.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::lock::lock_or_recover;

/// Handle returned by [`ThemeContext::subscribe`]; redeem it with
/// [`ThemeContext::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Arc<dyn Fn() + Send + Sync>;

pub struct ThemeContext {
    is_dark: AtomicBool,
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(SubscriberId, Listener)>>,
}

impl ThemeContext {
    #[must_use]
    pub fn new(is_dark: bool) -> Self {
        Self {
            is_dark: AtomicBool::new(is_dark),
            next_id: AtomicU64::new(0),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark.load(Ordering::Acquire)
    }

    /// Update the flag; returns whether the value actually changed.
    pub(crate) fn set_dark(&self, value: bool) -> bool {
        self.is_dark.swap(value, Ordering::AcqRel) != value
    }

    /// Register a listener; listeners fire in subscription order.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id.fetch_add(1, Ordering::Relaxed));
        lock_or_recover(&self.subscribers).push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = lock_or_recover(&self.subscribers);
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    /// Invoke every listener in subscription order. The list is cloned
    /// out of the lock first so a listener may re-enter (subscribe,
    /// unsubscribe, resolve) without deadlocking.
    pub(crate) fn notify(&self) {
        let listeners: Vec<(SubscriberId, Listener)> =
            lock_or_recover(&self.subscribers).clone();
        for (id, listener) in listeners {
            if catch_unwind(AssertUnwindSafe(|| listener())).is_err() {
                tracing::error!(
                    subscriber = id.0,
                    "theme subscriber panicked during notification; continuing"
                );
            }
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(false)
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("is_dark", &self.is_dark())
            .field("subscribers", &lock_or_recover(&self.subscribers).len())
            .finish()
    }
}
