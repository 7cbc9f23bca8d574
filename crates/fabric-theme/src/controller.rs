//! Theme mode resolution, persistence and document styling.
//!
//! On creation the mode comes from the stored preference when it holds a
//! valid value, else from the ambient color-scheme signal, else from the
//! configured fallback. Every mode change toggles the dark class on the
//! document root and body. Explicit choices ([`ThemeController::toggle`],
//! [`ThemeController::set_mode`]) are written to the store; ambient changes
//! are followed only while no explicit choice is stored.

use crate::mode::{ThemeMode, DARK_CLASS};
use crate::scheme::ColorSchemeSource;
use crate::store::PreferenceStore;
use fabric_common::{Document, DocumentTarget, FabricResult, Scope, Signal, Subscription};
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

/// Storage key used by default for the theme preference.
pub const DEFAULT_STORAGE_KEY: &str = "automation-theme-preference";

/// Construction options for a [`ThemeController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Key the preference is stored under
    pub storage_key: String,
    /// Mode used when neither storage nor the host expresses a preference
    pub fallback: ThemeMode,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fallback: ThemeMode::Dark,
        }
    }
}

/// Where the initial mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    /// A stored explicit choice
    Stored,
    /// The host color-scheme signal
    Ambient,
    /// The configured fallback
    Fallback,
}

struct ThemeInner {
    mode: Signal<ThemeMode>,
    options: ThemeOptions,
    store: Arc<dyn PreferenceStore>,
    scheme: Arc<dyn ColorSchemeSource>,
    // Set while an explicit choice exists that the store failed to keep
    pinned: AtomicBool,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl ThemeInner {
    fn stored_mode(&self) -> Option<ThemeMode> {
        match self.store.get(&self.options.storage_key) {
            Ok(Some(value)) => {
                let mode = ThemeMode::from_stored(&value);
                if mode.is_none() {
                    warn!(value = %value, "ignoring invalid stored theme preference");
                }
                mode
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "theme preference storage unavailable");
                None
            }
        }
    }

    fn has_explicit_choice(&self) -> bool {
        self.pinned.load(Ordering::SeqCst) || self.stored_mode().is_some()
    }

    fn persist(&self, mode: ThemeMode) {
        match self.store.set(&self.options.storage_key, mode.as_str()) {
            Ok(()) => self.pinned.store(false, Ordering::SeqCst),
            Err(e) => {
                self.pinned.store(true, Ordering::SeqCst);
                warn!(error = %e, %mode, "failed to persist theme preference");
            }
        }
    }

    fn follow_ambient(&self, prefers_dark: bool) {
        if self.has_explicit_choice() {
            debug!(prefers_dark, "ambient scheme change ignored, explicit choice stored");
            return;
        }
        let mode = ThemeMode::from_prefers_dark(prefers_dark);
        if self.mode.set_if_changed(mode) {
            debug!(%mode, "theme follows ambient scheme");
        }
    }
}

/// Owns the theme mode of a page.
///
/// Clones share the same state. Host listeners are released when the last
/// clone is dropped.
#[derive(Clone)]
pub struct ThemeController {
    inner: Arc<ThemeInner>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode())
            .field("storage_key", &self.inner.options.storage_key)
            .finish()
    }
}

impl ThemeController {
    /// Resolves the initial mode, styles `document` and starts following
    /// the ambient color scheme.
    pub fn new(
        options: ThemeOptions,
        store: Arc<dyn PreferenceStore>,
        scheme: Arc<dyn ColorSchemeSource>,
        document: Arc<dyn Document>,
    ) -> Self {
        let inner = Arc::new(ThemeInner {
            mode: Signal::new(options.fallback),
            options,
            store,
            scheme,
            pinned: AtomicBool::new(false),
            subscriptions: Mutex::new(Vec::new()),
        });

        let (initial, source) = resolve_initial(&inner);
        inner.mode.set(initial);
        apply_to_document(document.as_ref(), initial);
        info!(mode = %initial, ?source, "theme initialized");

        let styling = inner
            .mode
            .subscribe(move |mode| apply_to_document(document.as_ref(), *mode));

        let weak: Weak<ThemeInner> = Arc::downgrade(&inner);
        let ambient = inner.scheme.on_change(Box::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                inner.follow_ambient(prefers_dark);
            }
        }));

        inner.subscriptions.lock().extend([styling, ambient]);
        Self { inner }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.inner.mode.get()
    }

    /// Whether the dark mode is active.
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Flips the mode and stores the result. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mut next = self.inner.options.fallback;
        self.inner.mode.update_if(|current| {
            next = current.toggled();
            Some(next)
        });
        debug!(mode = %next, "theme toggled");
        self.inner.persist(next);
        next
    }

    /// Selects `mode` explicitly and stores it. Returns whether the mode changed.
    pub fn set_mode(&self, mode: ThemeMode) -> bool {
        let changed = self.inner.mode.set_if_changed(mode);
        self.inner.persist(mode);
        changed
    }

    /// Forgets the explicit choice and returns to the ambient preference.
    pub fn clear_preference(&self) -> FabricResult<()> {
        self.inner.store.remove(&self.inner.options.storage_key)?;
        self.inner.pinned.store(false, Ordering::SeqCst);

        let mode = self
            .inner
            .scheme
            .prefers_dark()
            .map_or(self.inner.options.fallback, ThemeMode::from_prefers_dark);
        self.inner.mode.set_if_changed(mode);
        debug!(%mode, "theme preference cleared");
        Ok(())
    }

    /// Whether an explicit choice currently suppresses ambient changes.
    pub fn has_explicit_choice(&self) -> bool {
        self.inner.has_explicit_choice()
    }

    /// Registers a listener called with the new mode after each change.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ThemeMode) + Send + Sync + 'static,
    {
        self.inner.mode.subscribe(listener)
    }

    /// Makes this controller visible to `scope` and its children.
    pub fn provide(&self, scope: &Scope) {
        scope.provide(self.clone());
    }

    /// The nearest controller provided to `scope`.
    pub fn from_scope(scope: &Scope) -> Option<Self> {
        scope.get::<Self>()
    }
}

fn resolve_initial(inner: &ThemeInner) -> (ThemeMode, ModeSource) {
    if let Some(mode) = inner.stored_mode() {
        return (mode, ModeSource::Stored);
    }
    match inner.scheme.prefers_dark() {
        Some(prefers_dark) => (ThemeMode::from_prefers_dark(prefers_dark), ModeSource::Ambient),
        None => (inner.options.fallback, ModeSource::Fallback),
    }
}

fn apply_to_document(document: &dyn Document, mode: ThemeMode) {
    let dark = mode.is_dark();
    document.set_class(DocumentTarget::Root, DARK_CLASS, dark);
    document.set_class(DocumentTarget::Body, DARK_CLASS, dark);
}
