use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::types::CachedHttpResponse;

/// Response bodies keyed by full request URL, query string included, so
/// different parameterizations never share an entry.
///
/// Expiry is lazy: a stale entry is dropped by the read that finds it. The
/// LRU capacity bounds memory when many distinct players are looked up.
/// Two concurrent misses on one key may both go upstream; the later write wins.
#[derive(Debug)]
pub struct ResponseCache {
    entries: RwLock<LruCache<String, CachedHttpResponse>>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached body if present and younger than the TTL.
    #[instrument(skip(self))]
    pub async fn get(&self, key: &str) -> Option<String> {
        let mut cache = self.entries.write().await;

        let entry = match cache.get(key) {
            Some(entry) => entry,
            None => {
                debug!("Cache miss: url={}", key);
                return None;
            }
        };

        if entry.is_expired() {
            debug!(
                "Removing expired cache entry: url={}, age={:?}, ttl={:?}",
                key,
                entry.cached_at.elapsed(),
                entry.ttl
            );
            cache.pop(key);
            return None;
        }

        debug!(
            "Cache hit: url={}, data_size={}, expires_in={:?}",
            key,
            entry.data.len(),
            entry.time_until_expiry()
        );
        Some(entry.data.clone())
    }

    #[instrument(skip(self, value), fields(data_size = value.len()))]
    pub async fn put(&self, key: String, value: String) {
        let entry = CachedHttpResponse::new(value, self.ttl);
        self.entries.write().await.put(key, entry);
    }

    /// Drops every entry, forcing the next request for any key upstream.
    pub async fn clear(&self) {
        let mut cache = self.entries.write().await;
        let dropped = cache.len();
        cache.clear();
        info!("Cleared response cache ({} entries)", dropped);
    }

    /// Number of stored entries, expired ones not yet evicted included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_after_put_within_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(120), 10);
        cache
            .put("https://x/lol/a".to_string(), "{\"a\":1}".to_string())
            .await;

        assert_eq!(
            cache.get("https://x/lol/a").await.as_deref(),
            Some("{\"a\":1}")
        );
    }

    #[tokio::test]
    async fn test_expired_entry_is_miss() {
        let cache = ResponseCache::new(Duration::from_millis(40), 10);
        cache.put("k".to_string(), "v".to_string()).await;
        assert!(cache.get("k").await.is_some());

        tokio::time::sleep(Duration::from_millis(80)).await;

        // Still stored until a read discovers it
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("k").await.is_none());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_query_string_is_part_of_key() {
        let cache = ResponseCache::new(Duration::from_secs(120), 10);
        cache
            .put("https://x/ids?start=0&count=20".to_string(), "[\"a\"]".to_string())
            .await;

        assert!(cache.get("https://x/ids?start=0&count=10").await.is_none());
        assert!(cache.get("https://x/ids?start=0&count=20").await.is_some());
    }

    #[tokio::test]
    async fn test_clear_empties_cache() {
        let cache = ResponseCache::new(Duration::from_secs(120), 10);
        cache.put("a".to_string(), "1".to_string()).await;
        cache.put("b".to_string(), "2".to_string()).await;

        cache.clear().await;

        assert!(cache.is_empty().await);
        assert!(cache.get("a").await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_used() {
        let cache = ResponseCache::new(Duration::from_secs(120), 2);
        cache.put("a".to_string(), "1".to_string()).await;
        cache.put("b".to_string(), "2".to_string()).await;
        assert!(cache.get("a").await.is_some());
        cache.put("c".to_string(), "3".to_string()).await;

        assert_eq!(cache.capacity().await, 2);
        assert!(cache.get("b").await.is_none());
        assert!(cache.get("a").await.is_some());
        assert!(cache.get("c").await.is_some());
    }

    #[tokio::test]
    async fn test_concurrent_writers_same_key() {
        let cache = Arc::new(ResponseCache::new(Duration::from_secs(120), 10));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.put("k".to_string(), format!("{i}")).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.len().await, 1);
        assert!(cache.get("k").await.is_some());
    }
}
