//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use clientele_core::{ClienteleResult, HealthCheck, HealthStatus};
use shaku::Interface;
use std::sync::Arc;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Values are JSON strings so the trait stays dyn-compatible. Keys expire on
/// their own after the TTL given at write time.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> ClienteleResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> ClienteleResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> ClienteleResult<bool>;

    /// Check if a key exists in the cache.
    async fn exists(&self, key: &str) -> ClienteleResult<bool>;

    /// Delete every key matching a glob pattern (`prefix:*`).
    ///
    /// Returns the number of keys deleted.
    async fn delete_pattern(&self, pattern: &str) -> ClienteleResult<u64>;

    /// Round-trips to the backend.
    async fn ping(&self) -> ClienteleResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Typed get/set on top of [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> ClienteleResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> ClienteleResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

impl<T: CacheInterface + ?Sized> CacheExt for T {}

/// Readiness check for the cache backend.
pub struct CacheHealthCheck {
    cache: Arc<dyn CacheInterface>,
}

impl CacheHealthCheck {
    /// Creates a check over the given cache.
    #[must_use]
    pub fn new(cache: Arc<dyn CacheInterface>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl HealthCheck for CacheHealthCheck {
    fn name(&self) -> &str {
        "cache"
    }

    async fn check(&self) -> HealthStatus {
        if !self.cache.is_enabled() {
            return HealthStatus::Degraded("cache disabled".to_string());
        }
        match self.cache.ping().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}
