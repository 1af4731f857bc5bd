use super::{AccountIdentity, ChampionMastery, LeagueEntry, MatchSummary, SummonerProfile};
use crate::constants::RANKED_SOLO_QUEUE;
use crate::data_fetcher::processors::format_win_rate;
use serde::Serialize;

/// Composed result of a player lookup.
///
/// `league_entries` and `recent_matches` are empty both when the player has no
/// data and when the lookup for them failed; the two cases are not told apart.
/// `champion_masteries` falls back to built-in content on failure.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerProfile {
    pub account: AccountIdentity,
    pub summoner: SummonerProfile,
    pub league_entries: Vec<LeagueEntry>,
    pub champion_masteries: Vec<ChampionMastery>,
    pub recent_matches: Vec<MatchSummary>,
}

/// Wins and losses of the profile owner across the expanded recent matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentRecord {
    pub wins: u32,
    pub losses: u32,
}

impl RecentRecord {
    pub fn win_rate(&self) -> String {
        format_win_rate(self.wins, self.losses)
    }
}

impl PlayerProfile {
    /// Ranked solo/duo standing, if the player has one.
    pub fn solo_queue(&self) -> Option<&LeagueEntry> {
        self.league_entries
            .iter()
            .find(|entry| entry.queue_type == RANKED_SOLO_QUEUE)
    }

    pub fn recent_record(&self) -> RecentRecord {
        let puuid = self.account.puuid.as_str();
        self.recent_matches
            .iter()
            .filter_map(|m| m.participant(puuid))
            .fold(RecentRecord { wins: 0, losses: 0 }, |mut record, p| {
                if p.win {
                    record.wins += 1;
                } else {
                    record.losses += 1;
                }
                record
            })
    }
}
