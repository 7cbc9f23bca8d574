//! Theme mode

use fabric_common::FabricError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document class set while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// Stored and displayed form, `"light"` or `"dark"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark mode.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Mode matching an ambient dark-scheme preference.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Parses a persisted value. Only the exact stored forms are accepted.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = FabricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stored(&s.trim().to_ascii_lowercase()).ok_or_else(|| {
            FabricError::validation(
                format!("unknown theme mode '{s}', expected 'light' or 'dark'"),
                Some("theme.mode".to_string()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_stored_form_is_strict() {
        assert_eq!(ThemeMode::from_stored("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_stored("Dark"), None);
        assert_eq!(ThemeMode::from_stored(""), None);
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_ambient_mapping() {
        assert_eq!(ThemeMode::from_prefers_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_prefers_dark(false), ThemeMode::Light);
    }
}
