//! Active language selection shared through a scope.

use crate::catalog::CopyCatalog;
use crate::copy::AppCopy;
use crate::locale::Locale;
use fabric_common::{Scope, Signal, Subscription};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The current language together with its copy tree.
///
/// Both halves are swapped in one step, so a reader never sees a language
/// paired with another language's copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nSnapshot {
    /// Active language
    pub language: Locale,
    /// Copy tree of `language`
    pub copy: Arc<AppCopy>,
}

/// Handle to the active language of a scope.
///
/// Clones share one selection. Language choice is held for the session
/// only and is not written to storage.
#[derive(Clone)]
pub struct I18nContext {
    catalog: Arc<CopyCatalog>,
    state: Signal<I18nSnapshot>,
}

impl fmt::Debug for I18nContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18nContext")
            .field("language", &self.language())
            .field("subscribers", &self.state.subscriber_count())
            .finish()
    }
}

impl I18nContext {
    /// Creates a context starting at `initial`.
    pub fn new(catalog: Arc<CopyCatalog>, initial: Locale) -> Self {
        let snapshot = I18nSnapshot {
            language: initial,
            copy: catalog.get(initial),
        };
        Self {
            catalog,
            state: Signal::new(snapshot),
        }
    }

    /// Creates a context starting at the default language.
    pub fn with_default(catalog: Arc<CopyCatalog>) -> Self {
        Self::new(catalog, Locale::default())
    }

    /// Active language.
    pub fn language(&self) -> Locale {
        self.state.with(|snapshot| snapshot.language)
    }

    /// Copy tree of the active language.
    pub fn copy(&self) -> Arc<AppCopy> {
        self.state.with(|snapshot| Arc::clone(&snapshot.copy))
    }

    /// Language and copy tree read together.
    pub fn snapshot(&self) -> I18nSnapshot {
        self.state.get()
    }

    /// Selects `language`.
    ///
    /// Selecting the active language changes nothing and notifies nobody.
    /// Returns whether the language changed.
    pub fn set_language(&self, language: Locale) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let changed = self.state.update_if(|current| {
            (current.language != language).then(|| I18nSnapshot {
                language,
                copy: catalog.get(language),
            })
        });
        if changed {
            debug!(%language, "language changed");
        }
        changed
    }

    /// Registers a listener called with the new snapshot after each change.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&I18nSnapshot) + Send + Sync + 'static,
    {
        self.state.subscribe(listener)
    }

    /// The catalog copy trees are drawn from.
    pub fn catalog(&self) -> &Arc<CopyCatalog> {
        &self.catalog
    }

    /// Makes this context visible to `scope` and its children.
    pub fn provide(&self, scope: &Scope) {
        scope.provide(self.clone());
    }

    /// The nearest context provided to `scope`.
    ///
    /// Without a provider, consumers get a detached context on the default
    /// language; selecting a language on it affects nobody else.
    pub fn from_scope(scope: &Scope) -> Option<Self> {
        scope.get::<Self>()
    }

    /// Like [`I18nContext::from_scope`], falling back to a detached default
    /// context over `catalog`.
    pub fn from_scope_or_default(scope: &Scope, catalog: &Arc<CopyCatalog>) -> Self {
        Self::from_scope(scope).unwrap_or_else(|| {
            debug!("no language provider in scope, using detached default");
            Self::with_default(Arc::clone(catalog))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabric_common::test_utils::RecordingListener;

    fn catalog() -> Arc<CopyCatalog> {
        CopyCatalog::embedded().unwrap()
    }

    #[test]
    fn test_defaults_to_english() {
        let ctx = I18nContext::with_default(catalog());
        assert_eq!(ctx.language(), Locale::En);
        assert_eq!(ctx.copy().header.nav.landing, "Landing");
    }

    #[test]
    fn test_set_language_swaps_copy() {
        let catalog = catalog();
        let ctx = I18nContext::with_default(Arc::clone(&catalog));

        assert!(ctx.set_language(Locale::Ko));
        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.language, Locale::Ko);
        assert_eq!(snapshot.copy, catalog.get(Locale::Ko));
    }

    #[test]
    fn test_set_same_language_is_idempotent() {
        let ctx = I18nContext::new(catalog(), Locale::Ru);
        let changes = RecordingListener::<I18nSnapshot>::new();
        let _sub = ctx.subscribe(changes.listener());

        assert!(!ctx.set_language(Locale::Ru));
        assert!(ctx.set_language(Locale::Bg));
        assert!(!ctx.set_language(Locale::Bg));

        let seen: Vec<_> = changes.values().into_iter().map(|s| s.language).collect();
        assert_eq!(seen, vec![Locale::Bg]);
    }

    #[test]
    fn test_listener_observes_matching_pair() {
        let catalog = catalog();
        let ctx = I18nContext::with_default(Arc::clone(&catalog));
        let reader = ctx.clone();
        let _sub = ctx.subscribe(move |snapshot| {
            assert_eq!(reader.language(), snapshot.language);
            assert_eq!(reader.copy(), snapshot.copy);
        });

        for locale in Locale::ALL {
            ctx.set_language(locale);
        }
        assert_eq!(ctx.language(), Locale::Bg);
    }

    #[test]
    fn test_scope_provider_and_default() {
        let catalog = catalog();
        let scope = Scope::root();
        assert!(I18nContext::from_scope(&scope).is_none());

        let detached = I18nContext::from_scope_or_default(&scope, &catalog);
        detached.set_language(Locale::Ar);

        let provided = I18nContext::with_default(Arc::clone(&catalog));
        provided.provide(&scope);
        let child = scope.child();
        let seen = I18nContext::from_scope_or_default(&child, &catalog);
        assert_eq!(seen.language(), Locale::En);

        seen.set_language(Locale::Zh);
        assert_eq!(provided.language(), Locale::Zh);
    }
}
