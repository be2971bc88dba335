//! One-shot auto-opening of the contact modal on a visitor's first visit.

pub mod store;

use std::time::Duration;

pub use store::{CookieStore, KeyValueStore, MemoryStore};

pub const SEEN_FLAG_KEY: &str = "hasSeenContactModal";
const SEEN_FLAG_VALUE: &str = "true";

/// Fires at most once per store: the first time the flag is absent, it is
/// set and the modal is shown.
#[derive(Debug, Clone)]
pub struct PromoTrigger {
    key: &'static str,
    delay: Duration,
}

impl PromoTrigger {
    pub fn new(delay: Duration) -> Self {
        Self {
            key: SEEN_FLAG_KEY,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self, store: &impl KeyValueStore) -> bool {
        store.get(self.key).is_none()
    }

    /// Set the flag if it is absent. Returns whether this call fired.
    pub fn fire(&self, store: &mut impl KeyValueStore) -> bool {
        if !self.is_armed(&*store) {
            return false;
        }
        store.set(self.key, SEEN_FLAG_VALUE);
        true
    }

    /// Wait out the delay, then fire and run `on_fire` if the flag is still
    /// absent. Does nothing, immediately, when the flag was already set.
    pub async fn run_after_delay<S, F>(&self, store: &mut S, on_fire: F) -> bool
    where
        S: KeyValueStore,
        F: FnOnce(),
    {
        if !self.is_armed(&*store) {
            return false;
        }

        tokio::time::sleep(self.delay).await;

        if self.fire(store) {
            tracing::debug!("Promo modal fired after {:?}", self.delay);
            on_fire();
            true
        } else {
            false
        }
    }
}
