//! Riot API client: one method per upstream endpoint, all sharing one HTTP
//! client, one response cache and one retry policy.

use reqwest::Client;
use std::sync::Arc;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client;
use super::retry::RetryPolicy;
use super::urls::{
    build_account_url, build_champion_mastery_url, build_league_entries_url, build_match_ids_url,
    build_match_url, build_summoner_url,
};
use crate::config::Config;
use crate::data_fetcher::cache::ResponseCache;
use crate::data_fetcher::models::{
    AccountIdentity, ChampionMastery, LeagueEntry, MatchResponse, MatchSummary, SummonerProfile,
};
use crate::data_fetcher::processors::build_match_summary;
use crate::error::AppError;

/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Debug, Clone)]
pub struct RiotClient {
    http: Client,
    config: Arc<Config>,
    cache: Arc<ResponseCache>,
    retry: RetryPolicy,
}

impl RiotClient {
    /// Builds a client from validated configuration.
    ///
    /// # Errors
    /// * `AppError::Config` - missing API key or otherwise invalid settings
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let http = create_http_client(&config.api_key, config.http_timeout_seconds)?;
        let cache = ResponseCache::new(config.cache_ttl(), config.cache_capacity);
        let retry = RetryPolicy::from_config(&config);

        info!(
            "Riot client ready: platform={}, regional={}, cache_ttl={:?}, max_attempts={}",
            config.platform_domain,
            config.regional_domain,
            cache.ttl(),
            retry.max_attempts
        );

        Ok(Self {
            http,
            config: Arc::new(config),
            cache: Arc::new(cache),
            retry,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub(super) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, AppError> {
        fetch(&self.http, &self.cache, &self.retry, url).await
    }

    #[instrument(skip(self))]
    pub async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountIdentity, AppError> {
        let url = build_account_url(&self.config.regional_domain, game_name, tag_line)?;
        self.get_json(&url).await
    }

    #[instrument(skip(self))]
    pub async fn get_summoner_by_puuid(&self, puuid: &str) -> Result<SummonerProfile, AppError> {
        let url = build_summoner_url(&self.config.platform_domain, puuid)?;
        self.get_json(&url).await
    }

    #[instrument(skip(self))]
    pub async fn get_league_entries_by_puuid(
        &self,
        puuid: &str,
    ) -> Result<Vec<LeagueEntry>, AppError> {
        let url = build_league_entries_url(&self.config.platform_domain, puuid)?;
        self.get_json(&url).await
    }

    #[instrument(skip(self))]
    pub async fn get_champion_masteries_by_puuid(
        &self,
        puuid: &str,
    ) -> Result<Vec<ChampionMastery>, AppError> {
        let url = build_champion_mastery_url(&self.config.platform_domain, puuid)?;
        self.get_json(&url).await
    }

    #[instrument(skip(self))]
    pub async fn get_match_ids_by_puuid(
        &self,
        puuid: &str,
        count: u32,
        start: u32,
    ) -> Result<Vec<String>, AppError> {
        let url = build_match_ids_url(&self.config.regional_domain, puuid, count, start)?;
        self.get_json(&url).await
    }

    /// Fetches one match and derives its per-participant stats.
    ///
    /// Only the raw upstream body is cached; the summary is rebuilt each call.
    #[instrument(skip(self))]
    pub async fn get_match_by_id(&self, match_id: &str) -> Result<MatchSummary, AppError> {
        let url = build_match_url(&self.config.regional_domain, match_id)?;
        let response: MatchResponse = self.get_json(&url).await?;
        Ok(build_match_summary(response))
    }

    /// Forces every following request upstream.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }
}
