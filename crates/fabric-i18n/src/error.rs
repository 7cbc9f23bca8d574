//! Error types for localized copy loading

use thiserror::Error;

/// Errors that can occur while loading or validating copy trees
#[derive(Error, Debug)]
pub enum I18nError {
    /// A language code outside the supported set
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    /// A locale code that does not parse as a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// A locale file could not be read
    #[error("Failed to load copy for {locale} from {path}")]
    ResourceLoad {
        /// Locale being loaded
        locale: String,
        /// File that failed
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A locale document is not valid JSON or does not fit the copy tree
    #[error("Failed to parse copy for {locale}: {source}")]
    Parse {
        /// Locale being parsed
        locale: String,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// A locale's copy tree differs in shape from the reference locale
    #[error(
        "Copy for {locale} does not match {reference}: {} missing, {} unexpected, {} null",
        missing.len(),
        unexpected.len(),
        null.len()
    )]
    IncompleteCopy {
        /// Locale that failed the check
        locale: String,
        /// Locale it was compared against
        reference: String,
        /// Key paths present in the reference but not here
        missing: Vec<String>,
        /// Key paths present here but not in the reference
        unexpected: Vec<String>,
        /// Key paths holding null
        null: Vec<String>,
    },

    /// No copy source was supplied for a supported locale
    #[error("No copy provided for locale {0}")]
    MissingLocale(String),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
