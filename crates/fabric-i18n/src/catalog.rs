//! Copy catalog: one validated copy tree per supported locale.

use crate::copy::AppCopy;
use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use crate::shape::{null_paths, ShapeDiff};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Locale every other copy tree is compared against.
pub const REFERENCE_LOCALE: Locale = Locale::En;

static EMBEDDED: OnceCell<Arc<CopyCatalog>> = OnceCell::new();

const EMBEDDED_SOURCES: [(Locale, &str); 6] = [
    (Locale::En, include_str!("../locales/en.json")),
    (Locale::Zh, include_str!("../locales/zh.json")),
    (Locale::Ko, include_str!("../locales/ko.json")),
    (Locale::Ru, include_str!("../locales/ru.json")),
    (Locale::Ar, include_str!("../locales/ar.json")),
    (Locale::Bg, include_str!("../locales/bg.json")),
];

/// Immutable set of complete copy trees, one per [`Locale`].
///
/// A catalog can only be built when every supported locale is present and
/// every tree has exactly the key paths of the reference locale, with no
/// null leaves.
#[derive(Debug, Clone)]
pub struct CopyCatalog {
    // Indexed by `Locale::ALL` position
    copies: Vec<Arc<AppCopy>>,
}

impl CopyCatalog {
    /// The catalog compiled into the binary.
    ///
    /// Parsed and validated on first use; later calls return the same catalog.
    pub fn embedded() -> I18nResult<Arc<Self>> {
        EMBEDDED
            .get_or_try_init(|| {
                let catalog = Self::from_sources(EMBEDDED_SOURCES)?;
                info!(locales = Locale::ALL.len(), "embedded copy catalog loaded");
                Ok(Arc::new(catalog))
            })
            .map(Arc::clone)
    }

    /// Builds a catalog from JSON documents keyed by locale.
    pub fn from_sources<'a, I>(sources: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = (Locale, &'a str)>,
    {
        let mut documents: HashMap<Locale, Value> = HashMap::new();
        for (locale, source) in sources {
            let value = serde_json::from_str(source).map_err(|source| I18nError::Parse {
                locale: locale.code().to_string(),
                source,
            })?;
            documents.insert(locale, value);
        }
        Self::from_documents(documents)
    }

    /// Loads `<code>.json` for every supported locale from `dir`.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> I18nResult<Self> {
        let dir = dir.as_ref();
        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let path = dir.join(locale.resource_file());
            let text = fs::read_to_string(&path).map_err(|source| I18nError::ResourceLoad {
                locale: locale.code().to_string(),
                path: path.display().to_string(),
                source,
            })?;
            debug!(%locale, path = %path.display(), "copy document read");
            sources.push((locale, text));
        }
        Self::from_sources(sources.iter().map(|(locale, text)| (*locale, text.as_str())))
    }

    fn from_documents(mut documents: HashMap<Locale, Value>) -> I18nResult<Self> {
        let reference = documents
            .get(&REFERENCE_LOCALE)
            .cloned()
            .ok_or_else(|| I18nError::MissingLocale(REFERENCE_LOCALE.code().to_string()))?;

        let mut copies = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let document = documents
                .remove(&locale)
                .ok_or_else(|| I18nError::MissingLocale(locale.code().to_string()))?;
            validate_document(locale, &reference, &document)?;

            let copy: AppCopy =
                serde_json::from_value(document).map_err(|source| I18nError::Parse {
                    locale: locale.code().to_string(),
                    source,
                })?;
            copies.push(Arc::new(copy));
        }

        Ok(Self { copies })
    }

    /// Copy tree for `locale`.
    pub fn get(&self, locale: Locale) -> Arc<AppCopy> {
        Arc::clone(&self.copies[locale_index(locale)])
    }

    /// Iterates `(locale, copy)` pairs in switcher order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &AppCopy)> {
        Locale::ALL
            .into_iter()
            .zip(self.copies.iter().map(|copy| &**copy))
    }
}

const fn locale_index(locale: Locale) -> usize {
    locale as usize
}

fn validate_document(locale: Locale, reference: &Value, document: &Value) -> I18nResult<()> {
    let diff = ShapeDiff::between(reference, document);
    let null = null_paths(document);
    if diff.is_empty() && null.is_empty() {
        return Ok(());
    }
    Err(I18nError::IncompleteCopy {
        locale: locale.code().to_string(),
        reference: REFERENCE_LOCALE.code().to_string(),
        missing: diff.missing,
        unexpected: diff.unexpected,
        null,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_is_complete() {
        let catalog = CopyCatalog::embedded().unwrap();
        for (locale, copy) in catalog.iter() {
            assert!(!copy.header.brand.is_empty(), "{locale}");
            assert!(!copy.landing.document_title.is_empty(), "{locale}");
        }
        assert_eq!(catalog.iter().count(), 6);
    }

    #[test]
    fn test_embedded_catalog_is_shared() {
        let first = CopyCatalog::embedded().unwrap();
        let second = CopyCatalog::embedded().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_copy_is_language_specific() {
        let catalog = CopyCatalog::embedded().unwrap();
        assert_eq!(catalog.get(Locale::En).header.nav.landing, "Landing");
        assert_ne!(
            catalog.get(Locale::Ko).landing.hero.heading,
            catalog.get(Locale::En).landing.hero.heading
        );
    }

    #[test]
    fn test_missing_locale_rejected() {
        let sources = EMBEDDED_SOURCES
            .into_iter()
            .filter(|(locale, _)| *locale != Locale::Bg);
        let err = CopyCatalog::from_sources(sources).unwrap_err();
        assert!(matches!(err, I18nError::MissingLocale(code) if code == "bg"));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let mut ru: Value = serde_json::from_str(EMBEDDED_SOURCES[3].1).unwrap();
        ru["header"]["nav"]
            .as_object_mut()
            .unwrap()
            .remove("planner");
        let ru = ru.to_string();

        let sources = EMBEDDED_SOURCES.into_iter().map(|(locale, text)| {
            if locale == Locale::Ru {
                (locale, ru.as_str())
            } else {
                (locale, text)
            }
        });
        match CopyCatalog::from_sources(sources).unwrap_err() {
            I18nError::IncompleteCopy {
                locale, missing, ..
            } => {
                assert_eq!(locale, "ru");
                assert_eq!(missing, vec!["header.nav.planner"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_leaf_rejected() {
        let mut zh: Value = serde_json::from_str(EMBEDDED_SOURCES[1].1).unwrap();
        zh["header"]["brand"] = Value::Null;
        let zh = zh.to_string();

        let sources = EMBEDDED_SOURCES.into_iter().map(|(locale, text)| {
            if locale == Locale::Zh {
                (locale, zh.as_str())
            } else {
                (locale, text)
            }
        });
        let err = CopyCatalog::from_sources(sources).unwrap_err();
        assert!(matches!(err, I18nError::IncompleteCopy { ref null, .. } if null == &vec!["header.brand".to_string()]));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let sources = EMBEDDED_SOURCES.into_iter().map(|(locale, text)| {
            if locale == Locale::Ar {
                (locale, "{ not json")
            } else {
                (locale, text)
            }
        });
        let err = CopyCatalog::from_sources(sources).unwrap_err();
        assert!(matches!(err, I18nError::Parse { ref locale, .. } if locale == "ar"));
    }
}
