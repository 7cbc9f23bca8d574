//! Host document abstraction.
//!
//! The site never touches a browser directly. Everything it needs from the
//! host page goes through the [`Document`] trait (title, root/body classes,
//! root attributes) and the event types in this module. [`MemoryDocument`]
//! is the in-process implementation used by the preview driver and tests.

use crate::types::{DocumentTarget, ElementId};
use parking_lot::Mutex;
use std::collections::{BTreeMap, BTreeSet};

/// Document-level side effects the site performs.
pub trait Document: Send + Sync {
    /// Sets the document title.
    fn set_title(&self, title: &str);

    /// Current document title.
    fn title(&self) -> String;

    /// Adds (`enabled = true`) or removes a class on `target`.
    fn set_class(&self, target: DocumentTarget, class: &str, enabled: bool);

    /// Whether `target` currently carries `class`.
    fn has_class(&self, target: DocumentTarget, class: &str) -> bool;

    /// Sets an attribute on the root element.
    fn set_root_attribute(&self, name: &str, value: &str);

    /// Reads an attribute from the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Default)]
struct DocumentState {
    title: String,
    root_classes: BTreeSet<String>,
    body_classes: BTreeSet<String>,
    root_attributes: BTreeMap<String, String>,
}

/// In-memory [`Document`].
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<DocumentState>,
}

impl MemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted classes currently set on `target`.
    pub fn classes(&self, target: DocumentTarget) -> Vec<String> {
        let state = self.state.lock();
        let set = match target {
            DocumentTarget::Root => &state.root_classes,
            DocumentTarget::Body => &state.body_classes,
        };
        set.iter().cloned().collect()
    }
}

impl Document for MemoryDocument {
    fn set_title(&self, title: &str) {
        title.clone_into(&mut self.state.lock().title);
    }

    fn title(&self) -> String {
        self.state.lock().title.clone()
    }

    fn set_class(&self, target: DocumentTarget, class: &str, enabled: bool) {
        let mut state = self.state.lock();
        let set = match target {
            DocumentTarget::Root => &mut state.root_classes,
            DocumentTarget::Body => &mut state.body_classes,
        };
        if enabled {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }

    fn has_class(&self, target: DocumentTarget, class: &str) -> bool {
        let state = self.state.lock();
        match target {
            DocumentTarget::Root => state.root_classes.contains(class),
            DocumentTarget::Body => state.body_classes.contains(class),
        }
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.state
            .lock()
            .root_attributes
            .insert(name.to_string(), value.to_string());
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.state.lock().root_attributes.get(name).cloned()
    }
}

/// Global events dispatched at document level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// A pointer press. `path` lists the hit element and its ancestors,
    /// innermost first.
    PointerDown {
        /// Composed event path
        path: Vec<ElementId>,
    },
    /// A key press, with the key named as in the DOM `key` property.
    KeyDown {
        /// Key name, e.g. `"Escape"`
        key: String,
    },
}

impl DocumentEvent {
    /// Pointer press on `target` nested under `ancestors` (innermost first).
    pub fn pointer_down<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ElementId>,
    {
        Self::PointerDown {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Key press.
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    /// Whether this is a press of the escape/cancel key.
    pub fn is_escape(&self) -> bool {
        matches!(self, Self::KeyDown { key } if key == "Escape" || key == "Esc")
    }

    /// Whether this is a pointer press landing outside `root`.
    pub fn is_pointer_outside(&self, root: &ElementId) -> bool {
        matches!(self, Self::PointerDown { path } if !path.contains(root))
    }
}

/// Pointer button of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Main button, usually the left one
    #[default]
    Primary,
    /// Wheel / middle button
    Auxiliary,
    /// Right button
    Secondary,
}

/// Modifier keys held during a click.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control key
    pub ctrl: bool,
    /// Meta / command key
    pub meta: bool,
    /// Shift key
    pub shift: bool,
    /// Alt / option key
    pub alt: bool,
}

impl Modifiers {
    /// Whether any modifier is held.
    pub const fn any(self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt
    }
}

/// A click on an interactive element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickEvent {
    /// Button that triggered the click
    pub button: PointerButton,
    /// Held modifier keys
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl ClickEvent {
    /// Plain primary-button click.
    pub fn primary() -> Self {
        Self::default()
    }

    /// Click with the given button and modifiers.
    pub fn new(button: PointerButton, modifiers: Modifiers) -> Self {
        Self {
            button,
            modifiers,
            default_prevented: false,
        }
    }

    /// Whether this click is a primary activation (main button, no modifiers).
    pub fn is_primary_activation(&self) -> bool {
        self.button == PointerButton::Primary && !self.modifiers.any()
    }

    /// Suppresses the host's default handling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`ClickEvent::prevent_default`] was called.
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
