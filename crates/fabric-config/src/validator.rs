//! Semantic checks serde cannot express.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::SiteConfig;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending key.
    pub fn validate(config: &SiteConfig) -> ConfigResult<()> {
        if config.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::validation(
                "theme.storage_key",
                "must not be empty",
            ));
        }

        for (field, class) in [
            ("router.active_class", &config.router.active_class),
            ("router.nav_link_class", &config.router.nav_link_class),
            ("router.nav_active_class", &config.router.nav_active_class),
        ] {
            Self::validate_class(field, class)?;
        }

        if config.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::validation("storage.path", "must not be empty"));
        }

        if config.logging.level.trim().is_empty() {
            return Err(ConfigError::validation("logging.level", "must not be empty"));
        }

        Ok(())
    }

    fn validate_class(field: &str, class: &str) -> ConfigResult<()> {
        if class.is_empty() {
            return Err(ConfigError::validation(field, "must not be empty"));
        }
        if class.chars().any(char::is_whitespace) {
            return Err(ConfigError::validation(
                field,
                format!("'{class}' must be a single class name"),
            ));
        }
        Ok(())
    }
}

impl SiteConfig {
    /// Shorthand for [`ConfigValidator::validate`].
    pub fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let mut config = SiteConfig::default();
        config.theme.storage_key = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "theme.storage_key"));
    }

    #[test]
    fn test_class_with_space_rejected() {
        let mut config = SiteConfig::default();
        config.router.nav_active_class = "nav-link active".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("router.nav_active_class"));
    }
}
