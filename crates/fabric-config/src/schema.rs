//! Configuration schema.

use fabric_common::logging::{LogFormat, LoggingConfig};
use fabric_i18n::Locale;
use fabric_theme::{ThemeMode, ThemeOptions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// General site settings
    pub site: SiteSection,
    /// Theme resolution
    pub theme: ThemeSection,
    /// Navigation link styling
    pub router: RouterSection,
    /// Preference storage
    pub storage: StorageSection,
    /// Logging
    pub logging: LoggingSection,
}

/// General site settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Language active before the visitor picks one
    pub default_language: Locale,
}

/// Theme settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSection {
    /// Key the explicit theme choice is stored under
    pub storage_key: String,
    /// Mode used when the host exposes no color-scheme signal
    pub fallback_mode: ThemeMode,
}

/// Link class names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterSection {
    /// Class added to a plain link matching the current path
    pub active_class: String,
    /// Base class of header navigation links
    pub nav_link_class: String,
    /// Class added to the header link of the current page
    pub nav_active_class: String,
}

/// Preference storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageSection {
    /// JSON file backing the preference store
    pub path: PathBuf,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// `EnvFilter` directive, e.g. `info` or `fabric_router=debug`
    pub level: String,
    /// Line format
    pub format: LogFormat,
}

impl SiteConfig {
    /// Options for the theme controller.
    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            storage_key: self.theme.storage_key.clone(),
            fallback: self.theme.fallback_mode,
        }
    }

    /// Logging bootstrap configuration.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.clone(),
            format: self.logging.format,
            ..LoggingConfig::default()
        }
    }
}
