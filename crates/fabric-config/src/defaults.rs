//! Default values for every configuration section.

use crate::schema::{LoggingSection, RouterSection, SiteSection, StorageSection, ThemeSection};
use fabric_common::logging::LogFormat;
use fabric_i18n::Locale;
use fabric_theme::{ThemeMode, DEFAULT_STORAGE_KEY};
use std::path::PathBuf;

/// Default location of the preference file, relative to the working directory
pub const DEFAULT_STORAGE_PATH: &str = ".fabric-site/preferences.json";

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            default_language: Locale::default(),
        }
    }
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fallback_mode: ThemeMode::Dark,
        }
    }
}

impl Default for RouterSection {
    fn default() -> Self {
        Self {
            active_class: fabric_router::DEFAULT_ACTIVE_CLASS.to_string(),
            nav_link_class: "nav-link".to_string(),
            nav_active_class: "nav-link--active".to_string(),
        }
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
