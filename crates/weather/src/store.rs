//! Expiring key-value store backing the weather cache.

use std::future::Future;
use std::time::{Duration, Instant};

use moka::future::Cache;
use moka::Expiry;

/// A concurrent key-value store whose entries expire after a per-entry TTL.
///
/// `get` must never return an entry past its expiry.
pub trait ExpiringStore<V>: Send + Sync {
    /// Look up a live entry.
    fn get(&self, key: &str) -> impl Future<Output = Option<V>> + Send;

    /// Store `value` under `key` for `ttl`, replacing any previous entry.
    fn insert(&self, key: String, value: V, ttl: Duration) -> impl Future<Output = ()> + Send;
}

/// A stored value tagged with its absolute expiry.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    ttl: Duration,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Per-entry expiry policy: each entry lives for the TTL it was inserted with.
struct EntryExpiry;

impl<V> Expiry<String, CacheEntry<V>> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CacheEntry<V>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &CacheEntry<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-process [`ExpiringStore`] backed by a bounded `moka` cache.
///
/// moka evicts expired entries lazily; reads additionally check the stored
/// expiry so a stale entry is never handed out.
pub struct MemoryStore<V> {
    cache: Cache<String, CacheEntry<V>>,
}

impl<V> MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a store holding at most `max_capacity` entries.
    pub fn new(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry)
            .build();
        Self { cache }
    }
}

impl<V> ExpiringStore<V> for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<V> {
        // Stale entries are only hidden, never invalidated here: a concurrent
        // insert may already have replaced them.
        let entry = self.cache.get(key).await?;
        entry.is_live(Instant::now()).then_some(entry.value)
    }

    async fn insert(&self, key: String, value: V, ttl: Duration) {
        let Some(expires_at) = Instant::now().checked_add(ttl).filter(|_| !ttl.is_zero()) else {
            tracing::warn!(?ttl, "Refusing to cache entry with unusable TTL");
            return;
        };
        let entry = CacheEntry {
            value,
            ttl,
            expires_at,
        };
        self.cache.insert(key, entry).await;
    }
}
