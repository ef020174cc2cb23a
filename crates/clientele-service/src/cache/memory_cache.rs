//! In-process cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use clientele_core::ClienteleResult;
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Cache held in process memory with per-entry expiry.
///
/// Used when Redis is disabled and as the cache double in tests. Patterns
/// support a single trailing `*`.
#[derive(Component, Default)]
#[shaku(interface = CacheInterface)]
pub struct InMemoryCacheService {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCacheService {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.read().values().filter(|e| e.is_live(now)).count()
    }

    /// Returns true when no live entries remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stored entries, expired ones included.
    #[cfg(test)]
    fn stored(&self) -> usize {
        self.entries.read().len()
    }

    fn matches(pattern: &str, key: &str) -> bool {
        match pattern.strip_suffix('*') {
            Some(prefix) => key.starts_with(prefix),
            None => key == pattern,
        }
    }
}

#[async_trait]
impl CacheInterface for InMemoryCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> ClienteleResult<Option<String>> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if entry.is_live(now) => return Ok(Some(entry.value.clone())),
                None => return Ok(None),
                Some(_) => {}
            }
        }
        // expired: drop it so the map does not grow without bound
        self.entries.write().retain(|_, e| e.is_live(now));
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> ClienteleResult<()> {
        let now = Instant::now();
        let entry = Entry {
            value: value.to_string(),
            expires_at: now + ttl,
        };
        let mut entries = self.entries.write();
        entries.retain(|_, e| e.is_live(now));
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> ClienteleResult<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .write()
            .remove(key)
            .is_some_and(|e| e.is_live(now)))
    }

    async fn exists(&self, key: &str) -> ClienteleResult<bool> {
        let now = Instant::now();
        Ok(self.entries.read().get(key).is_some_and(|e| e.is_live(now)))
    }

    async fn delete_pattern(&self, pattern: &str) -> ClienteleResult<u64> {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        let mut expired = 0;
        entries.retain(|key, entry| {
            if Self::matches(pattern, key) {
                if !entry.is_live(now) {
                    expired += 1;
                }
                false
            } else {
                true
            }
        });
        Ok((before - entries.len() - expired) as u64)
    }

    async fn ping(&self) -> ClienteleResult<()> {
        Ok(())
    }
}
