//! Application-wide constants and configuration defaults
//!
//! Every tunable that `Config` exposes has its default here, next to the
//! upstream routing values they relate to.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Header carrying the Riot API key on every request
pub const API_KEY_HEADER: &str = "X-Riot-Token";

/// Default upstream hosts
pub mod routing {
    /// Platform host serving summoner, league and mastery endpoints
    pub const DEFAULT_PLATFORM_DOMAIN: &str = "https://euw1.api.riotgames.com";

    /// Regional host serving account and match endpoints
    pub const DEFAULT_REGIONAL_DOMAIN: &str = "https://europe.api.riotgames.com";
}

/// Response cache defaults
pub mod cache {
    /// Freshness window for cached responses (2 minutes)
    pub const TTL_SECONDS: u64 = 120;

    /// Maximum number of cached responses before LRU eviction
    pub const CAPACITY: usize = 500;
}

/// Retry configuration
pub mod retry {
    /// Total attempts per request, the first one included
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds).
    /// Attempt `n` failing waits `BASE_DELAY_MS * 2^n` before attempt `n + 1`.
    pub const BASE_DELAY_MS: u64 = 1000;
}

/// Player lookup pipeline limits
pub mod pipeline {
    /// Number of recent match ids requested per lookup
    pub const MATCH_COUNT: u32 = 20;

    /// Number of those matches expanded into full detail
    pub const MATCH_DETAIL_LIMIT: usize = 15;

    /// Match detail requests allowed in flight at once
    pub const MATCH_CONCURRENCY: usize = 15;

    /// Ceiling on a whole lookup, backoff waits included
    pub const TIMEOUT_SECONDS: u64 = 30;
}

/// Environment variable names
pub mod env_vars {
    /// Riot API key override
    pub const API_KEY: &str = "RIOT_API_KEY";

    /// Platform host override
    pub const PLATFORM_DOMAIN: &str = "RIFTSTATS_PLATFORM_DOMAIN";

    /// Regional host override
    pub const REGIONAL_DOMAIN: &str = "RIFTSTATS_REGIONAL_DOMAIN";

    /// Log file path override
    pub const LOG_FILE: &str = "RIFTSTATS_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "RIFTSTATS_HTTP_TIMEOUT";
}

/// Queue identifier of ranked solo/duo in league entries
pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";
