//! Region-scoped view over a cache backend.

use super::{cache_keys, CacheExt, CacheInterface, CacheRegion, CacheSettings};
use clientele_core::ClienteleResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Entries of one [`CacheRegion`], keyed by id and written with the
/// region's TTL.
pub struct RegionCache<'a> {
    backend: &'a dyn CacheInterface,
    settings: &'a CacheSettings,
    region: CacheRegion,
}

impl<'a> RegionCache<'a> {
    #[must_use]
    pub fn new(
        backend: &'a dyn CacheInterface,
        settings: &'a CacheSettings,
        region: CacheRegion,
    ) -> Self {
        Self {
            backend,
            settings,
            region,
        }
    }

    fn key(&self, id: &str) -> String {
        cache_keys::entry(&self.settings.key_prefix, self.region, id)
    }

    /// Cached value for `id`, if present and not expired.
    pub async fn get<T: DeserializeOwned + Send>(&self, id: &str) -> ClienteleResult<Option<T>> {
        self.backend.get(&self.key(id)).await
    }

    /// Stores `value` under `id` with the region TTL.
    pub async fn put<T: Serialize + Send + Sync>(&self, id: &str, value: &T) -> ClienteleResult<()> {
        let ttl = self.settings.ttl(self.region);
        debug!("Caching {}:{} for {}s", self.region, id, ttl.as_secs());
        self.backend.set(&self.key(id), value, ttl).await
    }

    /// Drops the entry for `id`.
    pub async fn evict(&self, id: &str) -> ClienteleResult<bool> {
        self.backend.delete(&self.key(id)).await
    }

    /// Drops every entry of the region.
    pub async fn clear(&self) -> ClienteleResult<u64> {
        let pattern = cache_keys::region_pattern(&self.settings.key_prefix, self.region);
        let removed = self.backend.delete_pattern(&pattern).await?;
        debug!("Cleared {} entries from region {}", removed, self.region);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCacheService;
    use std::time::Duration;

    fn settings() -> CacheSettings {
        CacheSettings {
            customer_ttl: Duration::from_secs(60),
            default_ttl: Duration::from_millis(20),
            key_prefix: "t".to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_get_evict() {
        let backend = InMemoryCacheService::new();
        let settings = settings();
        let region = RegionCache::new(&backend, &settings, CacheRegion::Customer);

        region.put("1", &"alice".to_string()).await.unwrap();
        assert!(backend.exists("t:customer:1").await.unwrap());
        assert_eq!(region.get::<String>("1").await.unwrap().as_deref(), Some("alice"));

        assert!(region.evict("1").await.unwrap());
        assert_eq!(region.get::<String>("1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_leaves_other_regions() {
        let backend = InMemoryCacheService::new();
        let settings = settings();
        let customers = RegionCache::new(&backend, &settings, CacheRegion::Customer);
        let defaults = RegionCache::new(&backend, &settings, CacheRegion::Default);

        customers.put("1", &1_u32).await.unwrap();
        customers.put("2", &2_u32).await.unwrap();
        defaults.put("1", &3_u32).await.unwrap();

        assert_eq!(customers.clear().await.unwrap(), 2);
        assert_eq!(customers.get::<u32>("2").await.unwrap(), None);
        assert_eq!(defaults.get::<u32>("1").await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_region_ttl_applies() {
        let backend = InMemoryCacheService::new();
        let settings = settings();
        let defaults = RegionCache::new(&backend, &settings, CacheRegion::Default);

        defaults.put("1", &1_u32).await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(defaults.get::<u32>("1").await.unwrap(), None);
    }
}
