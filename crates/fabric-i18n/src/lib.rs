//! # Fabric I18n
//!
//! Localized copy for the Automation Fabric site.
//!
//! Every supported [`Locale`] ships one complete copy tree. The trees are
//! embedded at compile time, checked against each other by the build script
//! and checked again when the [`CopyCatalog`] is built, so a missing key is
//! never a runtime concern. [`I18nContext`] holds the active language and
//! its tree for everything below a [`fabric_common::Scope`], and
//! [`LanguageSwitcher`] is the disclosure control that changes it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod context;
pub mod copy;
pub mod error;
pub mod locale;
pub mod shape;
pub mod switcher;

pub use catalog::{CopyCatalog, REFERENCE_LOCALE};
pub use context::{I18nContext, I18nSnapshot};
pub use copy::AppCopy;
pub use error::{I18nError, I18nResult};
pub use locale::{Locale, TextDirection};
pub use switcher::{LanguageOption, LanguageSwitcher, MountedSwitcher};
