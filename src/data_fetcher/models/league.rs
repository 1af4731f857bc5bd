use crate::data_fetcher::processors::format_win_rate;
use serde::{Deserialize, Serialize};

/// One ranked queue standing. A player has zero or more of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueEntry {
    #[serde(rename = "queueType")]
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    #[serde(rename = "leaguePoints")]
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

impl LeagueEntry {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win rate as a whole percentage, e.g. `"75%"`.
    pub fn win_rate(&self) -> String {
        format_win_rate(self.wins, self.losses)
    }

    /// `"GOLD II 54 LP"` style standing.
    pub fn standing(&self) -> String {
        format!("{} {} {} LP", self.tier, self.rank, self.league_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(wins: u32, losses: u32) -> LeagueEntry {
        LeagueEntry {
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: "GOLD".to_string(),
            rank: "II".to_string(),
            league_points: 54,
            wins,
            losses,
        }
    }

    #[test]
    fn test_win_rate_and_standing() {
        let e = entry(3, 1);
        assert_eq!(e.win_rate(), "75%");
        assert_eq!(e.games_played(), 4);
        assert_eq!(e.standing(), "GOLD II 54 LP");
    }

    #[test]
    fn test_no_games_is_zero_percent() {
        assert_eq!(entry(0, 0).win_rate(), "0%");
    }
}
