//! Supported locales

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::{CharacterDirection, LanguageIdentifier};

/// The closed set of languages the site ships copy for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the default
    #[default]
    En,
    /// Chinese
    Zh,
    /// Korean
    Ko,
    /// Russian
    Ru,
    /// Arabic
    Ar,
    /// Bulgarian
    Bg,
}

/// Text direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Left to right
    Ltr,
    /// Right to left
    Rtl,
}

impl TextDirection {
    /// Value for the `dir` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Self; 6] = [Self::En, Self::Zh, Self::Ko, Self::Ru, Self::Ar, Self::Bg];

    /// Get the language code for this locale
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Ko => "ko",
            Self::Ru => "ru",
            Self::Ar => "ar",
            Self::Bg => "bg",
        }
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    /// Native name shown in the language switcher
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Ko => "한국어",
            Self::Ru => "Русский",
            Self::Ar => "العربية",
            Self::Bg => "Български",
        }
    }

    /// Upper-cased code shown as a badge next to the name
    pub fn badge(self) -> String {
        self.code().to_ascii_uppercase()
    }

    /// Convert to a `LanguageIdentifier`
    pub fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// Script direction, as reported by the language identifier
    pub fn direction(self) -> TextDirection {
        match self.to_language_identifier() {
            Ok(id) if matches!(id.character_direction(), CharacterDirection::RTL) => {
                TextDirection::Rtl
            }
            _ => TextDirection::Ltr,
        }
    }

    /// Name of this locale's copy document
    pub fn resource_file(self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnsupportedLanguage(s.to_string()))
    }
}
