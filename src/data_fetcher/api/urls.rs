//! URL building utilities for the upstream endpoints
//!
//! Path segments are percent-encoded, so Riot IDs with spaces or non-ASCII
//! characters are safe to pass as-is.

use crate::error::AppError;
use reqwest::Url;

fn build_url(base: &str, segments: &[&str], query: &[(&str, String)]) -> Result<String, AppError> {
    let mut url = Url::parse(base)
        .map_err(|e| AppError::config_error(format!("Invalid API host '{base}': {e}")))?;

    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| AppError::config_error(format!("API host '{base}' cannot be a base URL")))?;
        path.pop_if_empty().extend(segments);
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in query {
            pairs.append_pair(name, value);
        }
    }

    Ok(url.into())
}

/// Account lookup by Riot ID (regional host).
///
/// # Example
/// ```
/// use riftstats::data_fetcher::api::build_account_url;
///
/// let url = build_account_url("https://europe.api.riotgames.com", "Hide on bush", "KR1").unwrap();
/// assert_eq!(
///     url,
///     "https://europe.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Hide%20on%20bush/KR1"
/// );
/// ```
pub fn build_account_url(regional: &str, game_name: &str, tag_line: &str) -> Result<String, AppError> {
    build_url(
        regional,
        &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line],
        &[],
    )
}

/// Summoner lookup by PUUID (platform host).
pub fn build_summoner_url(platform: &str, puuid: &str) -> Result<String, AppError> {
    build_url(
        platform,
        &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        &[],
    )
}

/// Ranked entries by PUUID (platform host).
pub fn build_league_entries_url(platform: &str, puuid: &str) -> Result<String, AppError> {
    build_url(platform, &["lol", "league", "v4", "entries", "by-puuid", puuid], &[])
}

/// Champion masteries by PUUID (platform host).
pub fn build_champion_mastery_url(platform: &str, puuid: &str) -> Result<String, AppError> {
    build_url(
        platform,
        &["lol", "champion-mastery", "v4", "champion-masteries", "by-puuid", puuid],
        &[],
    )
}

/// Recent match ids by PUUID (regional host).
///
/// # Example
/// ```
/// use riftstats::data_fetcher::api::build_match_ids_url;
///
/// let url = build_match_ids_url("https://europe.api.riotgames.com", "abc", 20, 0).unwrap();
/// assert_eq!(
///     url,
///     "https://europe.api.riotgames.com/lol/match/v5/matches/by-puuid/abc/ids?start=0&count=20"
/// );
/// ```
pub fn build_match_ids_url(
    regional: &str,
    puuid: &str,
    count: u32,
    start: u32,
) -> Result<String, AppError> {
    build_url(
        regional,
        &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
        &[("start", start.to_string()), ("count", count.to_string())],
    )
}

/// Match detail by id (regional host).
pub fn build_match_url(regional: &str, match_id: &str) -> Result<String, AppError> {
    build_url(regional, &["lol", "match", "v5", "matches", match_id], &[])
}
