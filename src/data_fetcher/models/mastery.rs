use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionMastery {
    #[serde(rename = "championId")]
    pub champion_id: i64,
    #[serde(rename = "championLevel")]
    pub champion_level: u32,
    #[serde(rename = "championPoints")]
    pub champion_points: u64,
}

/// Orders masteries by points, highest first. Stable for equal points.
pub fn sort_by_points(masteries: &mut [ChampionMastery]) {
    masteries.sort_by(|a, b| b.champion_points.cmp(&a.champion_points));
}
