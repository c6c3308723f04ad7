//! In-process TTL cache for expensive reads.
//!
//! Values of any clonable type are stored type-erased behind an `Arc` and keyed by
//! string. Entries expire lazily: an expired entry is treated as absent on read and
//! swept on the next write. When the cache is disabled every call goes straight to
//! the loader.

use std::{
    any::Any,
    collections::HashMap,
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

use crate::server::error::AppError;

struct CacheEntry {
    expires_at: Instant,
    value: Arc<dyn Any + Send + Sync>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Shared cache handle. Clones share the same storage.
#[derive(Clone)]
pub struct Cache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    enabled: bool,
}

impl Cache {
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gets a live value, or `None` when missing, expired, disabled, or stored
    /// under a different type.
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        if !self.enabled {
            return None;
        }

        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.is_expired(Instant::now()) {
            return None;
        }

        entry.value.downcast_ref::<T>().cloned()
    }

    /// Stores `value` for `ttl`, sweeping expired entries.
    pub async fn set<T>(&self, key: impl Into<String>, value: T, ttl: Duration)
    where
        T: Clone + Send + Sync + 'static,
    {
        if !self.enabled {
            return;
        }

        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired(now));
        entries.insert(
            key.into(),
            CacheEntry {
                expires_at: now + ttl,
                value: Arc::new(value),
            },
        );
    }

    /// Returns the cached value for `key`, or runs `load` and caches its result.
    ///
    /// Errors from `load` are returned without being cached. Concurrent misses for
    /// the same key may each run `load`.
    pub async fn get_or_set<T, F, Fut>(&self, key: &str, ttl: Duration, load: F) -> Result<T, AppError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        if let Some(value) = self.get::<T>(key).await {
            tracing::debug!("Cache hit for {}", key);
            return Ok(value);
        }

        let value = load().await?;
        self.set(key, value.clone(), ttl).await;

        Ok(value)
    }

    /// Removes every entry whose key starts with `prefix`.
    pub async fn clear_prefix(&self, prefix: &str) {
        if !self.enabled {
            return;
        }

        self.entries
            .write()
            .await
            .retain(|key, _| !key.starts_with(prefix));
    }
}
