//! Configuration loading with environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::SiteConfig;
use fabric_i18n::Locale;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "FABRIC_CONFIG_PATH";

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "fabric-site.toml";

/// Configuration loader for the site
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `FABRIC_CONFIG_PATH` if set, else `fabric-site.toml` from the
    /// working directory, else defaults. Environment overrides and
    /// validation apply in every case.
    pub fn load() -> ConfigResult<SiteConfig> {
        let path = env::var(CONFIG_PATH_VAR)
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);
        Self::load_from_file(path)
    }

    /// Loads a TOML file. A missing file yields the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<SiteConfig> {
        let path = path.as_ref();
        let config = match std::fs::read_to_string(path) {
            Ok(content) => {
                info!(path = %path.display(), "Loading configuration");
                Self::parse(&content)?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No configuration file, using defaults");
                SiteConfig::default()
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::finish(config, |var| env::var(var).ok())
    }

    /// Parses TOML content, then applies environment overrides and validates.
    pub fn from_toml_str(content: &str) -> ConfigResult<SiteConfig> {
        Self::finish(Self::parse(content)?, |var| env::var(var).ok())
    }

    /// Parses TOML content with overrides taken from `lookup` instead of the
    /// process environment.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> ConfigResult<SiteConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::finish(Self::parse(content)?, lookup)
    }

    fn parse(content: &str) -> ConfigResult<SiteConfig> {
        Ok(toml::from_str(content)?)
    }

    fn finish<F>(mut config: SiteConfig, lookup: F) -> ConfigResult<SiteConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `FABRIC_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(config: &mut SiteConfig, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = lookup("FABRIC_DEFAULT_LANGUAGE") {
            config.site.default_language =
                language
                    .parse::<Locale>()
                    .map_err(|e| ConfigError::EnvParse {
                        var: "FABRIC_DEFAULT_LANGUAGE".to_string(),
                        source: Box::new(e),
                    })?;
            debug!(language = %config.site.default_language, "default language overridden");
        }

        if let Some(key) = lookup("FABRIC_THEME_STORAGE_KEY") {
            config.theme.storage_key = key;
        }

        if let Some(path) = lookup("FABRIC_STORAGE_PATH") {
            config.storage.path = PathBuf::from(path);
        }

        if let Some(level) = lookup("FABRIC_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
