//! Player lookup pipeline: account → summoner → {league, mastery, matches}.

use tracing::{error, info, instrument};

use super::client::RiotClient;
use crate::data_fetcher::models::mastery::sort_by_points;
use crate::data_fetcher::models::{MatchSummary, PlayerProfile};
use crate::data_fetcher::processors::Stage;
use crate::error::AppError;

impl RiotClient {
    /// Composes a full player profile from a Riot ID.
    ///
    /// Account and summoner lookups must succeed; their errors reach the caller
    /// with the upstream classification intact (404 → `NotFound`, 401/403 →
    /// `Forbidden`, ...). Ranked entries, masteries and match history are
    /// fetched concurrently and fall back according to [`Stage::policy`].
    /// The whole lookup, backoff waits included, is bounded by the configured
    /// pipeline timeout.
    ///
    /// # Example
    /// ```rust,no_run
    /// use riftstats::{Config, RiotClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), riftstats::AppError> {
    ///     let client = RiotClient::new(Config::load().await?)?;
    ///     let profile = client.get_complete_player_data("Agurin", "EUW").await?;
    ///     println!("{} is level {}", profile.account.riot_id(), profile.summoner.level);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self))]
    pub async fn get_complete_player_data(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<PlayerProfile, AppError> {
        let ceiling = self.config().pipeline_timeout();
        match tokio::time::timeout(ceiling, self.compose_profile(game_name, tag_line)).await {
            Ok(result) => result,
            Err(_) => {
                error!(
                    "Lookup of {}#{} exceeded {:?}, giving up",
                    game_name, tag_line, ceiling
                );
                Err(AppError::pipeline_timeout(ceiling.as_secs()))
            }
        }
    }

    async fn compose_profile(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<PlayerProfile, AppError> {
        let account = Stage::Account.settle(self.get_account_by_riot_id(game_name, tag_line).await)?;
        let puuid = account.puuid.as_str();
        info!("Resolved {} to puuid {}", account.riot_id(), puuid);

        let summoner = Stage::Summoner.settle(self.get_summoner_by_puuid(puuid).await)?;

        let (league_entries, champion_masteries, recent_matches) = tokio::join!(
            self.get_league_entries_by_puuid(puuid),
            self.get_champion_masteries_by_puuid(puuid),
            self.fetch_recent_matches(puuid),
        );

        let league_entries = Stage::LeagueEntries.settle(league_entries)?;
        let mut champion_masteries = Stage::ChampionMastery.settle(champion_masteries)?;
        sort_by_points(&mut champion_masteries);
        let recent_matches = Stage::MatchHistory.settle(recent_matches)?;

        info!(
            "Composed profile for {}: {} ranked queues, {} masteries, {} matches",
            account.riot_id(),
            league_entries.len(),
            champion_masteries.len(),
            recent_matches.len()
        );

        Ok(PlayerProfile {
            account,
            summoner,
            league_entries,
            champion_masteries,
            recent_matches,
        })
    }

    /// Recent match ids, then detail for the first `match_detail_limit` of them.
    /// Only the id lookup can fail; individual detail failures are dropped.
    async fn fetch_recent_matches(&self, puuid: &str) -> Result<Vec<MatchSummary>, AppError> {
        let config = self.config();
        let ids = self
            .get_match_ids_by_puuid(puuid, config.match_count, 0)
            .await?;
        let subset = &ids[..ids.len().min(config.match_detail_limit)];
        Ok(self.expand_matches(subset, config.match_concurrency).await)
    }
}
