//! Lock-free access to the active configuration.

use crate::schema::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Configuration cache using arc-swap for lock-free reads.
pub struct ConfigCache {
    config: ArcSwap<SiteConfig>,
}

impl ConfigCache {
    /// Creates a cache holding `config`.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Current configuration.
    pub fn get(&self) -> Arc<SiteConfig> {
        self.config.load_full()
    }

    /// Replaces the configuration atomically. Readers holding the previous
    /// `Arc` keep seeing the old value.
    pub fn update(&self, config: SiteConfig) {
        self.config.store(Arc::new(config));
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

impl std::fmt::Debug for ConfigCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigCache")
            .field("config", &self.get())
            .finish()
    }
}
