//! Integration tests for fabric-config crate.

use fabric_common::logging::LogFormat;
use fabric_common::test_utils::{create_temp_dir, init_test_logging};
use fabric_config::{ConfigCache, ConfigError, ConfigLoader, SiteConfig};
use fabric_i18n::Locale;
use fabric_theme::ThemeMode;
use proptest::prelude::*;
use std::fs;

#[test]
fn test_missing_file_yields_defaults() {
    init_test_logging();
    let dir = create_temp_dir();
    let config = ConfigLoader::load_from_file(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.site.default_language, Locale::En);
    assert_eq!(config.theme.fallback_mode, ThemeMode::Dark);
}

#[test]
fn test_load_from_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("fabric-site.toml");
    fs::write(
        &path,
        r#"
[site]
default_language = "ko"

[router]
active_class = "current"

[logging]
level = "debug"
format = "compact"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.site.default_language, Locale::Ko);
    assert_eq!(config.router.active_class, "current");
    assert_eq!(config.logging.format, LogFormat::Compact);

    let logging = config.logging_config();
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.format, LogFormat::Compact);
    assert!(logging.file_path.is_none());
}

#[test]
fn test_malformed_file() {
    let dir = create_temp_dir();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[site\n").unwrap();
    assert!(matches!(
        ConfigLoader::load_from_file(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_theme_options_follow_config() {
    let mut config = SiteConfig::default();
    config.theme.storage_key = "custom-key".to_string();
    config.theme.fallback_mode = ThemeMode::Light;
    let options = config.theme_options();
    assert_eq!(options.storage_key, "custom-key");
    assert_eq!(options.fallback, ThemeMode::Light);
}

#[test]
fn test_config_cache() {
    let cache = ConfigCache::default();
    let before = cache.get();

    let mut next = SiteConfig::default();
    next.site.default_language = Locale::Bg;
    cache.update(next);

    assert_eq!(before.site.default_language, Locale::En);
    assert_eq!(cache.get().site.default_language, Locale::Bg);
}

proptest! {
    #[test]
    fn prop_serialized_config_loads_back(index in 0usize..6, light in any::<bool>()) {
        let mut config = SiteConfig::default();
        config.site.default_language = Locale::ALL[index];
        config.theme.fallback_mode = if light { ThemeMode::Light } else { ThemeMode::Dark };

        let text = toml::to_string(&config).unwrap();
        let loaded = ConfigLoader::from_toml_str_with(&text, |_| None).unwrap();
        prop_assert_eq!(loaded, config);
    }
}
