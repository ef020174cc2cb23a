//! Caching infrastructure for the service layer.
//!
//! A raw string cache ([`CacheInterface`]) with Redis and in-memory
//! backends, and [`RegionCache`], which maps entries into TTL-scoped regions
//! using an explicit [`CacheSettings`].

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;
mod region;
mod settings;

pub use cache_interface::{CacheExt, CacheHealthCheck, CacheInterface};
pub use cache_keys::CacheRegion;
pub use memory_cache::{InMemoryCacheService, InMemoryCacheServiceParameters};
pub use redis_cache::{create_redis_pool, RedisCacheService, RedisCacheServiceParameters};
pub use region::RegionCache;
pub use settings::CacheSettings;
