//! Integration tests for fabric-common crate.

use fabric_common::markup::Element;
use fabric_common::{
    ClickEvent, Document, DocumentEvent, DocumentTarget, ElementId, EventSource, FabricError,
    MemoryDocument, Modifiers, PointerButton, Scope, Signal,
};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_child_scope_shadows_parent() {
    let root = Scope::root();
    root.provide(Signal::new(1_u32));
    let child = root.child();
    let grandchild = child.child();

    assert_eq!(grandchild.get::<Signal<u32>>().map(|s| s.get()), Some(1));

    child.provide(Signal::new(2_u32));
    assert_eq!(grandchild.get::<Signal<u32>>().map(|s| s.get()), Some(2));
    assert_eq!(root.get::<Signal<u32>>().map(|s| s.get()), Some(1));
    assert_eq!(grandchild.depth(), 2);
}

#[test]
fn test_sibling_scopes_are_isolated() {
    let left = Scope::root();
    let right = Scope::root();
    left.provide(Signal::new("left".to_string()));
    assert!(!right.contains::<Signal<String>>());
}

#[test]
fn test_subscription_scoped_to_guard_lifetime() {
    let events = EventSource::<DocumentEvent>::new();
    let escapes = Arc::new(AtomicUsize::new(0));

    {
        let counter = Arc::clone(&escapes);
        let _guard = events.subscribe(move |event| {
            if event.is_escape() {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        events.emit(&DocumentEvent::key_down("Escape"));
        events.emit(&DocumentEvent::key_down("Enter"));
    }

    assert_eq!(events.emit(&DocumentEvent::key_down("Escape")), 0);
    assert_eq!(escapes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_pointer_outside_detection() {
    let root = ElementId::new("language-switcher");
    let inside = DocumentEvent::pointer_down(["language-switcher__option", "language-switcher"]);
    let outside = DocumentEvent::pointer_down(["app-shell"]);
    assert!(!inside.is_pointer_outside(&root));
    assert!(outside.is_pointer_outside(&root));
    assert!(!DocumentEvent::key_down("Escape").is_pointer_outside(&root));
}

#[test]
fn test_primary_activation() {
    assert!(ClickEvent::primary().is_primary_activation());
    assert!(!ClickEvent::new(PointerButton::Auxiliary, Modifiers::default()).is_primary_activation());
    let shifted = Modifiers {
        shift: true,
        ..Modifiers::default()
    };
    assert!(!ClickEvent::new(PointerButton::Primary, shifted).is_primary_activation());
}

#[test]
fn test_memory_document() {
    let document = MemoryDocument::new();
    document.set_class(DocumentTarget::Root, "dark", true);
    document.set_class(DocumentTarget::Root, "dark", true);
    document.set_root_attribute("dir", "rtl");

    assert_eq!(document.classes(DocumentTarget::Root), vec!["dark".to_string()]);
    assert!(!document.has_class(DocumentTarget::Body, "dark"));
    assert_eq!(document.root_attribute("dir").as_deref(), Some("rtl"));

    document.set_class(DocumentTarget::Root, "dark", false);
    assert!(document.classes(DocumentTarget::Root).is_empty());
}

#[test]
fn test_error_helpers() {
    let err = FabricError::storage("quota exceeded");
    assert!(err.is_storage());
    assert!(!FabricError::config("bad").is_storage());

    let err = FabricError::validation("must not be empty", Some("theme.storage_key".to_string()));
    assert!(err.to_string().contains("must not be empty"));
}

proptest! {
    #[test]
    fn prop_text_is_always_escaped(text in ".*") {
        let html = Element::new("p").text(&text).render();
        let inner = &html[3..html.len() - 4];
        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
        prop_assert!(!inner.contains('"'));
    }

    #[test]
    fn prop_signal_notifies_only_on_change(values in prop::collection::vec(0u8..4, 0..24)) {
        let signal = Signal::new(0_u8);
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        let _sub = signal.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut current = 0_u8;
        let mut expected = 0;
        for value in values {
            if value != current {
                expected += 1;
                current = value;
            }
            signal.set_if_changed(value);
        }
        prop_assert_eq!(notified.load(Ordering::SeqCst), expected);
        prop_assert_eq!(signal.get(), current);
    }
}
