//! Expiring key/value cache for read-through lookups.
//!
//! Entries carry an absolute expiry computed at insert time. Expired entries
//! are evicted lazily by the `get` that finds them; there is no background
//! sweep and no capacity bound.

use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Default lifetime of a cache entry.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// A cached value with its absolute expiry.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    data: V,
    expires_at: Instant,
}

/// Thread-safe in-memory cache with a fixed TTL.
///
/// Owned by the service that reads through it; dropping the service drops
/// the cache.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self { entries: DashMap::new(), ttl }
    }

    /// Get a cached value by key.
    ///
    /// Returns `None` if the key is missing or its expiry has been reached.
    /// An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if now < entry.expires_at => return Some(entry.data.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(key, |_, entry| now >= entry.expires_at);
        }
        None
    }

    /// Store a value, replacing any previous entry and restarting its TTL.
    pub fn set(&self, key: impl Into<String>, data: V) {
        let expires_at = Instant::now() + self.ttl;
        self.entries.insert(key.into(), CacheEntry { data, expires_at });
    }

    /// Number of entries held, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
