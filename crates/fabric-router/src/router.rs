//! Router state and navigation.

use crate::error::{RouterError, RouterResult};
use crate::history::History;
use crate::path::normalize_path;
use crate::route::RouteTable;
use fabric_common::{Scope, Signal, Subscription};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

struct RouterInner<V> {
    table: RouteTable<V>,
    path: Signal<String>,
    history: Arc<dyn History>,
    pop_subscription: Mutex<Option<Subscription>>,
}

/// Owns the current path and keeps it in sync with the host history.
///
/// Cloning a `Router` yields another handle to the same state. The history
/// listener is released when the last handle is dropped.
pub struct Router<V> {
    inner: Arc<RouterInner<V>>,
}

impl<V> Clone for Router<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> fmt::Debug for Router<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("path", &self.inner.path.get())
            .field("routes", &self.inner.table.len())
            .finish()
    }
}

impl<V> Router<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Creates a router over `table`, starting at the host's current location.
    ///
    /// Without a host location the router starts at `/`.
    pub fn new(table: RouteTable<V>, history: Arc<dyn History>) -> Self {
        let initial = history
            .location()
            .map_or_else(|| "/".to_string(), |location| normalize_path(&location));
        debug!(path = %initial, routes = table.len(), "router created");

        let inner = Arc::new(RouterInner {
            table,
            path: Signal::new(initial),
            history: Arc::clone(&history),
            pop_subscription: Mutex::new(None),
        });

        let path = inner.path.clone();
        let weak_history: Weak<dyn History> = Arc::downgrade(&history);
        let subscription = history.on_pop(Box::new(move || {
            let Some(history) = weak_history.upgrade() else {
                return;
            };
            let location = history
                .location()
                .map_or_else(|| "/".to_string(), |location| normalize_path(&location));
            if path.set_if_changed(location.clone()) {
                debug!(path = %location, "router synced from history");
            }
        }));
        *inner.pop_subscription.lock() = Some(subscription);

        Self { inner }
    }

    /// Current normalized path.
    pub fn path(&self) -> String {
        self.inner.path.get()
    }

    /// Navigates to `target`.
    ///
    /// The target is normalized first. Navigating to the current path does
    /// nothing; otherwise a history entry is pushed and subscribers are
    /// notified. Returns whether the path changed.
    pub fn navigate(&self, target: &str) -> bool {
        let next = normalize_path(target);
        if self.inner.path.with(|current| *current == next) {
            debug!(path = %next, "navigation to current path ignored");
            return false;
        }

        self.inner.history.push(&next);
        let changed = self.inner.path.set_if_changed(next.clone());
        debug!(path = %next, "navigated");
        changed
    }

    /// View the current path resolves to.
    ///
    /// Unknown paths resolve to the first route. Only an empty table yields `None`.
    pub fn current_view(&self) -> Option<V> {
        let path = self.path();
        if !self.inner.table.is_registered(&path) {
            if self.inner.table.is_empty() {
                return None;
            }
            warn!(path = %path, "no route matches, rendering fallback");
        }
        self.inner.table.resolve(&path).cloned()
    }

    /// Whether `target` names the current path after normalization.
    pub fn is_active(&self, target: &str) -> bool {
        let wanted = normalize_path(target);
        self.inner.path.with(|current| *current == wanted)
    }

    /// The route table this router resolves against.
    pub fn table(&self) -> &RouteTable<V> {
        &self.inner.table
    }

    /// Registers a listener called with the new path after every change.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&String) + Send + Sync + 'static,
    {
        self.inner.path.subscribe(listener)
    }

    /// Makes this router visible to consumers in `scope` and its children.
    pub fn provide(&self, scope: &Scope) {
        scope.provide(self.clone());
    }

    /// Looks up the nearest router provided to `scope`.
    ///
    /// `consumer` names the caller in the error returned when no router
    /// is in scope.
    pub fn from_scope(scope: &Scope, consumer: &'static str) -> RouterResult<Self> {
        scope
            .get::<Self>()
            .ok_or(RouterError::MissingRouter { consumer })
    }
}
