use serde::{Deserialize, Serialize};

/// Riot account resolved from a Riot ID. Keyed by `puuid` across every other endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub puuid: String,
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(rename = "tagLine")]
    pub tag_line: String,
}

impl AccountIdentity {
    /// Riot ID in its display form, `GameName#TAG`.
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonerProfile {
    #[serde(default)]
    pub id: String,
    pub puuid: String,
    #[serde(rename = "summonerLevel")]
    pub level: u32,
    #[serde(rename = "profileIconId")]
    pub profile_icon_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserializes_upstream_shape() {
        let json = r#"{"puuid":"p-1","gameName":"Hide on bush","tagLine":"KR1"}"#;
        let account: AccountIdentity = serde_json::from_str(json).unwrap();

        assert_eq!(account.puuid, "p-1");
        assert_eq!(account.riot_id(), "Hide on bush#KR1");
    }

    #[test]
    fn test_summoner_without_id_field() {
        let json = r#"{"puuid":"p-1","summonerLevel":512,"profileIconId":6,"revisionDate":1}"#;
        let summoner: SummonerProfile = serde_json::from_str(json).unwrap();

        assert_eq!(summoner.id, "");
        assert_eq!(summoner.level, 512);
        assert_eq!(summoner.profile_icon_id, 6);
    }
}
