//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use clientele_config::RedisConfig;
use clientele_core::{ClienteleError, ClienteleResult};
use deadpool_redis::{redis::AsyncCommands, Pool, PoolConfig, Runtime};
use shaku::Component;
use std::time::Duration;
use tracing::debug;

/// Keys fetched per SCAN round trip.
const SCAN_BATCH: usize = 100;

/// Creates a Redis connection pool from configuration.
pub fn create_redis_pool(config: &RedisConfig) -> ClienteleResult<Pool> {
    let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
    redis_cfg.pool = Some(PoolConfig::new(config.pool_size as usize));
    redis_cfg
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| ClienteleError::cache(format!("Failed to create Redis pool: {e}")))
}

/// Redis-based cache service.
///
/// Without a pool the service is disabled: reads miss and writes are dropped.
#[derive(Component, Default)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Pool>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service.
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    async fn get_conn(&self) -> ClienteleResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| ClienteleError::cache(format!("Failed to get Redis connection: {e}"))),
            None => Err(ClienteleError::cache("Cache is disabled")),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> ClienteleResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| ClienteleError::cache(format!("Failed to get key '{key}': {e}")))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> ClienteleResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| ClienteleError::cache(format!("Failed to set key '{key}': {e}")))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> ClienteleResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| ClienteleError::cache(format!("Failed to delete key '{key}': {e}")))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> ClienteleResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        conn.exists(key)
            .await
            .map_err(|e| ClienteleError::cache(format!("Failed to check key '{key}': {e}")))
    }

    async fn delete_pattern(&self, pattern: &str) -> ClienteleResult<u64> {
        if !self.is_enabled() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let mut cursor: u64 = 0;
        let mut deleted: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = deadpool_redis::redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(|e| ClienteleError::cache(format!("Failed to scan keys: {e}")))?;

            if !keys.is_empty() {
                let removed: u64 = conn
                    .del(&keys)
                    .await
                    .map_err(|e| ClienteleError::cache(format!("Failed to delete keys: {e}")))?;
                deleted += removed;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        debug!("Deleted {} keys matching pattern '{}'", deleted, pattern);
        Ok(deleted)
    }

    async fn ping(&self) -> ClienteleResult<()> {
        let mut conn = self.get_conn().await?;
        let _pong: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| ClienteleError::cache(format!("Ping failed: {e}")))?;
        Ok(())
    }
}
