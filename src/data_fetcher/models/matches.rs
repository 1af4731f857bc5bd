use serde::{Deserialize, Serialize};

/// Match-v5 response as returned upstream. Only the fields this crate reads are modelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchMetadata {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInfo {
    /// Epoch milliseconds
    #[serde(rename = "gameCreation", default)]
    pub game_creation: i64,
    /// Seconds
    #[serde(rename = "gameDuration")]
    pub game_duration: i64,
    #[serde(rename = "gameMode", default)]
    pub game_mode: String,
    #[serde(rename = "queueId", default)]
    pub queue_id: i32,
    pub participants: Vec<ParticipantDto>,
    pub teams: Vec<TeamDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub puuid: String,
    #[serde(rename = "riotIdGameName", default)]
    pub riot_id_game_name: String,
    #[serde(rename = "riotIdTagline", default)]
    pub riot_id_tagline: String,
    #[serde(rename = "championId")]
    pub champion_id: i64,
    #[serde(rename = "championName", default)]
    pub champion_name: String,
    #[serde(rename = "teamId")]
    pub team_id: i32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    #[serde(default)]
    pub item0: i64,
    #[serde(default)]
    pub item1: i64,
    #[serde(default)]
    pub item2: i64,
    #[serde(default)]
    pub item3: i64,
    #[serde(default)]
    pub item4: i64,
    #[serde(default)]
    pub item5: i64,
    #[serde(default)]
    pub item6: i64,
    #[serde(rename = "totalMinionsKilled", default)]
    pub total_minions_killed: u32,
    #[serde(rename = "neutralMinionsKilled", default)]
    pub neutral_minions_killed: u32,
    #[serde(rename = "goldEarned", default)]
    pub gold_earned: u32,
}

impl ParticipantDto {
    /// Item slots 0 through 6 in slot order; 0 marks an empty slot.
    pub fn items(&self) -> Vec<i64> {
        vec![
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDto {
    #[serde(rename = "teamId")]
    pub team_id: i32,
    pub win: bool,
}

/// A match with per-request derived stats attached.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub game_creation: i64,
    pub game_duration: i64,
    pub game_mode: String,
    pub queue_id: i32,
    pub participants: Vec<ParticipantSummary>,
    pub teams: Vec<TeamSummary>,
}

impl MatchSummary {
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantSummary> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }

    pub fn team_members(&self, team_id: i32) -> impl Iterator<Item = &ParticipantSummary> {
        self.participants.iter().filter(move |p| p.team_id == team_id)
    }

    /// Game start in UTC, if the upstream timestamp is usable.
    pub fn played_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.game_creation).filter(|_| self.game_creation > 0)
    }

    /// Duration as `mm:ss`.
    pub fn duration_display(&self) -> String {
        let seconds = self.game_duration.max(0);
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantSummary {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
    pub champion_id: i64,
    pub champion_name: String,
    pub team_id: i32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub items: Vec<i64>,
    pub creep_score: u32,
    pub gold_earned: u32,
    pub kda: f64,
    pub kda_display: String,
    /// 1-indexed position within the team by descending KDA
    pub team_rank: usize,
    pub win: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub team_id: i32,
    pub win: bool,
}
