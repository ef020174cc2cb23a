//! Cache TTL settings.

use super::CacheRegion;
use clientele_config::CacheConfig;
use std::time::Duration;

/// TTLs and key prefix handed to the cache layer at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// TTL of the customer region.
    pub customer_ttl: Duration,
    /// TTL of the default region.
    pub default_ttl: Duration,
    /// Prefix prepended to every key.
    pub key_prefix: String,
}

impl CacheSettings {
    /// TTL applied to entries of `region`.
    #[must_use]
    pub const fn ttl(&self, region: CacheRegion) -> Duration {
        match region {
            CacheRegion::Customer => self.customer_ttl,
            CacheRegion::Default => self.default_ttl,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self::from(&CacheConfig::default())
    }
}

impl From<&CacheConfig> for CacheSettings {
    fn from(config: &CacheConfig) -> Self {
        Self {
            customer_ttl: config.customer_ttl(),
            default_ttl: config.default_ttl(),
            key_prefix: config.key_prefix.clone(),
        }
    }
}
