//! Cache entry with TTL support

use std::time::{Duration, Instant};

/// Cached HTTP response body together with when it was stored.
#[derive(Debug, Clone)]
pub struct CachedHttpResponse {
    pub data: String,
    pub cached_at: Instant,
    pub ttl: Duration,
}

impl CachedHttpResponse {
    pub fn new(data: String, ttl: Duration) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl,
        }
    }

    /// An entry older than its TTL is stale even though it is still stored.
    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > self.ttl
    }

    pub fn time_until_expiry(&self) -> Duration {
        self.ttl.saturating_sub(self.cached_at.elapsed())
    }
}
