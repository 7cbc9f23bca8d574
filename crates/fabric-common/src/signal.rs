//! Synchronous reactive primitives.
//!
//! [`EventSource`] is a listener list that delivers events in registration
//! order on the caller's thread. [`Signal`] pairs a value with an event
//! source and notifies subscribers after every effective change.
//! [`Subscription`] is the registration guard: dropping it removes the
//! listener, so a listener's lifetime is tied to whoever holds the guard.
//!
//! Listeners are invoked after all internal locks are released, so a
//! listener may read or write the signal it is subscribed to, subscribe new
//! listeners or drop its own guard.

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::{Arc, Weak};

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Listeners<E> {
    next_id: u64,
    entries: Vec<(u64, Listener<E>)>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

/// A list of listeners notified synchronously on [`EventSource::emit`].
pub struct EventSource<E> {
    listeners: Arc<Mutex<Listeners<E>>>,
}

impl<E> Clone for EventSource<E> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<E> Default for EventSource<E> {
    fn default() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }
}

impl<E> fmt::Debug for EventSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("listeners", &self.listeners.lock().entries.len())
            .finish()
    }
}

impl<E: 'static> EventSource<E> {
    /// Creates an event source with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`; it stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = {
            let mut guard = self.listeners.lock();
            let id = guard.next_id;
            guard.next_id += 1;
            guard.entries.push((id, Arc::new(listener)));
            id
        };

        let weak: Weak<Mutex<Listeners<E>>> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = weak.upgrade() {
                listeners.lock().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Delivers `event` to every listener registered at the time of the call.
    ///
    /// Returns the number of listeners notified.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<Listener<E>> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }
}

/// Guard for a registered listener. Dropping it unregisters the listener.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wraps an arbitrary release action.
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Unregisters now. Equivalent to dropping the guard.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// A shared value with synchronous change notification.
///
/// Clones share the same value and subscriber list.
pub struct Signal<T> {
    value: Arc<RwLock<T>>,
    changes: EventSource<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            changes: self.changes.clone(),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.read())
            .field("subscribers", &self.changes.listener_count())
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    /// Creates a signal holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            changes: EventSource::new(),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Replaces the value and notifies subscribers unconditionally.
    pub fn set(&self, value: T) {
        *self.value.write() = value.clone();
        self.changes.emit(&value);
    }

    /// Computes a replacement from the current value under the write lock.
    ///
    /// `f` returns `None` to leave the value untouched; subscribers are only
    /// notified when a replacement was stored. Returns whether it was.
    pub fn update_if(&self, f: impl FnOnce(&T) -> Option<T>) -> bool {
        let next = {
            let mut guard = self.value.write();
            match f(&guard) {
                Some(next) => {
                    *guard = next.clone();
                    next
                }
                None => return false,
            }
        };
        self.changes.emit(&next);
        true
    }

    /// Registers a listener called with the new value after each change.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.changes.subscribe(listener)
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.changes.listener_count()
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Signal<T> {
    /// Stores `value` only if it differs from the current one.
    ///
    /// Returns whether subscribers were notified.
    pub fn set_if_changed(&self, value: T) -> bool {
        self.update_if(|current| (*current != value).then(|| value.clone()))
    }
}
