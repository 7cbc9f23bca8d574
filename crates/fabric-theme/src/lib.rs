//! # Fabric Theme
//!
//! Light/dark theme handling for the Automation Fabric site.
//!
//! [`ThemeController`] resolves the initial [`ThemeMode`] from a
//! [`PreferenceStore`] or the host's [`ColorSchemeSource`], mirrors every
//! change onto the document and stores explicit choices.
//! [`ThemeToggleState`] describes the toggle button for a mode.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod controller;
pub mod mode;
pub mod scheme;
pub mod store;
pub mod toggle;

pub use controller::{ModeSource, ThemeController, ThemeOptions, DEFAULT_STORAGE_KEY};
pub use mode::{ThemeMode, DARK_CLASS};
pub use scheme::{AmbientScheme, ColorSchemeSource};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use toggle::ThemeToggleState;
