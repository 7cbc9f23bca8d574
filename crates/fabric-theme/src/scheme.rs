//! Ambient color-scheme signal.

use fabric_common::{EventSource, Subscription};
use parking_lot::Mutex;
use tracing::debug;

/// The host's light/dark preference, e.g. an OS setting.
pub trait ColorSchemeSource: Send + Sync {
    /// Whether the host prefers a dark scheme. `None` when the host
    /// exposes no preference.
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers a listener for preference changes.
    fn on_change(&self, listener: Box<dyn Fn(bool) + Send + Sync>) -> Subscription;
}

/// In-memory [`ColorSchemeSource`] whose preference can be changed at will.
#[derive(Debug)]
pub struct AmbientScheme {
    prefers_dark: Mutex<Option<bool>>,
    changes: EventSource<bool>,
}

impl AmbientScheme {
    /// A host reporting the given preference.
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Mutex::new(Some(prefers_dark)),
            changes: EventSource::new(),
        }
    }

    /// A host without a color-scheme signal.
    pub fn unsupported() -> Self {
        Self {
            prefers_dark: Mutex::new(None),
            changes: EventSource::new(),
        }
    }

    /// Changes the preference and notifies listeners if it differs.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let changed = {
            let mut current = self.prefers_dark.lock();
            let changed = *current != Some(prefers_dark);
            *current = Some(prefers_dark);
            changed
        };
        if changed {
            debug!(prefers_dark, "ambient color scheme changed");
            self.changes.emit(&prefers_dark);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.changes.listener_count()
    }
}

impl ColorSchemeSource for AmbientScheme {
    fn prefers_dark(&self) -> Option<bool> {
        *self.prefers_dark.lock()
    }

    fn on_change(&self, listener: Box<dyn Fn(bool) + Send + Sync>) -> Subscription {
        self.changes.subscribe(move |prefers_dark| listener(*prefers_dark))
    }
}
