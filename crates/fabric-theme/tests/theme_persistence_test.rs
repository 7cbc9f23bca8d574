//! Theme persistence round trips and ambient override suppression.

use fabric_common::test_utils::{create_temp_dir, init_test_logging, RecordingListener};
use fabric_common::{Document, DocumentTarget, MemoryDocument};
use fabric_theme::{
    AmbientScheme, FileStore, MemoryStore, PreferenceStore, ThemeController, ThemeMode,
    ThemeOptions, DARK_CLASS, DEFAULT_STORAGE_KEY,
};
use proptest::prelude::*;
use std::sync::Arc;

fn controller(
    store: Arc<dyn PreferenceStore>,
    scheme: Arc<AmbientScheme>,
    document: Arc<MemoryDocument>,
) -> ThemeController {
    ThemeController::new(ThemeOptions::default(), store, scheme, document)
}

#[test]
fn test_reinit_uses_persisted_value_not_ambient() {
    init_test_logging();
    let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
    let scheme = Arc::new(AmbientScheme::new(true));

    let first = controller(store.clone(), scheme.clone(), Arc::new(MemoryDocument::new()));
    assert_eq!(first.mode(), ThemeMode::Dark);
    assert_eq!(first.toggle(), ThemeMode::Light);
    drop(first);

    let document = Arc::new(MemoryDocument::new());
    let second = controller(store, scheme, document.clone());
    assert_eq!(second.mode(), ThemeMode::Light);
    assert!(!document.has_class(DocumentTarget::Root, DARK_CLASS));
}

#[test]
fn test_file_store_survives_restart() {
    let dir = create_temp_dir();
    let path = dir.path().join("preferences.json");
    let scheme = Arc::new(AmbientScheme::new(false));

    {
        let store: Arc<dyn PreferenceStore> = Arc::new(FileStore::open(&path).unwrap());
        let theme = controller(store, scheme.clone(), Arc::new(MemoryDocument::new()));
        assert_eq!(theme.toggle(), ThemeMode::Dark);
    }

    let store: Arc<dyn PreferenceStore> = Arc::new(FileStore::open(&path).unwrap());
    assert_eq!(
        store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
    let theme = controller(store, scheme, Arc::new(MemoryDocument::new()));
    assert_eq!(theme.mode(), ThemeMode::Dark);
}

#[test]
fn test_ambient_change_after_toggle_is_ignored() {
    let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
    let scheme = Arc::new(AmbientScheme::new(false));
    let document = Arc::new(MemoryDocument::new());
    let theme = controller(store, scheme.clone(), document.clone());
    let changes = RecordingListener::<ThemeMode>::new();
    let _sub = theme.subscribe(changes.listener());

    theme.toggle();
    scheme.set_prefers_dark(true);
    scheme.set_prefers_dark(false);

    assert_eq!(theme.mode(), ThemeMode::Dark);
    assert_eq!(changes.values(), vec![ThemeMode::Dark]);
    assert!(document.has_class(DocumentTarget::Body, DARK_CLASS));
}

#[test]
fn test_storage_written_externally_suppresses_ambient() {
    let store = Arc::new(MemoryStore::new());
    let scheme = Arc::new(AmbientScheme::new(false));
    let theme = controller(store.clone(), scheme.clone(), Arc::new(MemoryDocument::new()));

    store.set(DEFAULT_STORAGE_KEY, "light").unwrap();
    scheme.set_prefers_dark(true);
    assert_eq!(theme.mode(), ThemeMode::Light);
}

#[test]
fn test_ambient_changes_are_not_persisted() {
    let store = Arc::new(MemoryStore::new());
    let scheme = Arc::new(AmbientScheme::new(false));
    let theme = controller(store.clone(), scheme.clone(), Arc::new(MemoryDocument::new()));

    assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap(), None);
    scheme.set_prefers_dark(true);
    assert_eq!(theme.mode(), ThemeMode::Dark);
    assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap(), None);

    theme.toggle();
    assert_eq!(
        store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("light")
    );
}

proptest! {
    #[test]
    fn prop_toggle_flips_once_per_call(prefers_dark in any::<bool>(), presses in 1usize..12) {
        let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
        let document = Arc::new(MemoryDocument::new());
        let theme = controller(store.clone(), Arc::new(AmbientScheme::new(prefers_dark)), document.clone());

        let mut expected = ThemeMode::from_prefers_dark(prefers_dark);
        for _ in 0..presses {
            expected = expected.toggled();
            prop_assert_eq!(theme.toggle(), expected);
            let stored = store.get(DEFAULT_STORAGE_KEY).unwrap();
            prop_assert_eq!(stored.as_deref(), Some(expected.as_str()));
            prop_assert_eq!(document.has_class(DocumentTarget::Root, DARK_CLASS), expected.is_dark());
        }
    }

    #[test]
    fn prop_ambient_never_overrides_explicit_choice(
        initial_dark in any::<bool>(),
        ambient in prop::collection::vec(any::<bool>(), 0..16),
    ) {
        let scheme = Arc::new(AmbientScheme::new(initial_dark));
        let theme = controller(Arc::new(MemoryStore::new()), scheme.clone(), Arc::new(MemoryDocument::new()));
        let chosen = theme.toggle();

        for prefers_dark in ambient {
            scheme.set_prefers_dark(prefers_dark);
            prop_assert_eq!(theme.mode(), chosen);
        }
    }
}
