use crate::config::Config;
use crate::constants::RANKED_SOLO_QUEUE;
use crate::data_fetcher::models::{
    AccountIdentity, ChampionMastery, LeagueEntry, MatchInfo, MatchMetadata, MatchResponse,
    MatchSummary, ParticipantDto, SummonerProfile, TeamDto,
};
use crate::data_fetcher::processors::build_match_summary;

/// API key used by every test configuration
pub const TEST_API_KEY: &str = "RGAPI-00000000-test-key";

/// Configuration pointing both hosts at `base_uri` (usually a mock server)
/// with millisecond backoff so retry paths finish quickly.
pub fn test_config(base_uri: &str) -> Config {
    Config {
        api_key: TEST_API_KEY.to_string(),
        platform_domain: base_uri.to_string(),
        regional_domain: base_uri.to_string(),
        http_timeout_seconds: 5,
        backoff_base_ms: 5,
        pipeline_timeout_seconds: 10,
        ..Config::default()
    }
}

/// Test utilities for creating upstream payloads and derived records
pub struct TestDataBuilder;

impl TestDataBuilder {
    pub fn account(puuid: &str) -> AccountIdentity {
        AccountIdentity {
            puuid: puuid.to_string(),
            game_name: "Agurin".to_string(),
            tag_line: "EUW".to_string(),
        }
    }

    pub fn summoner(puuid: &str) -> SummonerProfile {
        SummonerProfile {
            id: format!("summoner-{puuid}"),
            puuid: puuid.to_string(),
            level: 742,
            profile_icon_id: 5367,
        }
    }

    pub fn league_entry(queue_type: &str, wins: u32, losses: u32) -> LeagueEntry {
        LeagueEntry {
            queue_type: queue_type.to_string(),
            tier: "CHALLENGER".to_string(),
            rank: "I".to_string(),
            league_points: 1204,
            wins,
            losses,
        }
    }

    pub fn solo_queue_entry() -> LeagueEntry {
        Self::league_entry(RANKED_SOLO_QUEUE, 300, 250)
    }

    pub fn champion_masteries() -> Vec<ChampionMastery> {
        vec![
            ChampionMastery {
                champion_id: 64,
                champion_level: 42,
                champion_points: 2_100_000,
            },
            ChampionMastery {
                champion_id: 234,
                champion_level: 18,
                champion_points: 640_000,
            },
        ]
    }

    pub fn participant(
        puuid: &str,
        team_id: i32,
        kills: u32,
        deaths: u32,
        assists: u32,
    ) -> ParticipantDto {
        ParticipantDto {
            puuid: puuid.to_string(),
            riot_id_game_name: format!("Player {puuid}"),
            riot_id_tagline: "EUW".to_string(),
            champion_id: 64,
            champion_name: "LeeSin".to_string(),
            team_id,
            kills,
            deaths,
            assists,
            item0: 6692,
            item1: 3071,
            item2: 0,
            item3: 0,
            item4: 0,
            item5: 0,
            item6: 3364,
            total_minions_killed: 40,
            neutral_minions_killed: 150,
            gold_earned: 12_500,
        }
    }

    /// Ten-player match with `owner_puuid` on team 100. Other players are
    /// `p1`..`p9`, team 100 holds the first five.
    pub fn match_response(match_id: &str, owner_puuid: &str, owner_wins: bool) -> MatchResponse {
        let participants: Vec<ParticipantDto> = (0..10)
            .map(|i| {
                let puuid = if i == 0 {
                    owner_puuid.to_string()
                } else {
                    format!("p{i}")
                };
                let team_id = if i < 5 { 100 } else { 200 };
                Self::participant(&puuid, team_id, i + 1, (i % 4) + 1, 10 - i)
            })
            .collect();

        MatchResponse {
            metadata: MatchMetadata {
                match_id: match_id.to_string(),
                participants: participants.iter().map(|p| p.puuid.clone()).collect(),
            },
            info: MatchInfo {
                game_creation: 1_717_000_000_000,
                game_duration: 1_845,
                game_mode: "CLASSIC".to_string(),
                queue_id: 420,
                participants,
                teams: vec![
                    TeamDto {
                        team_id: 100,
                        win: owner_wins,
                    },
                    TeamDto {
                        team_id: 200,
                        win: !owner_wins,
                    },
                ],
            },
        }
    }

    /// [`Self::match_response`] for owner `puuid-0`, converted to a summary.
    pub fn match_summary(match_id: &str, owner_wins: bool) -> MatchSummary {
        build_match_summary(Self::match_response(match_id, "puuid-0", owner_wins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_fixture_shape() {
        let response = TestDataBuilder::match_response("EUW1_1", "owner", true);
        assert_eq!(response.info.participants.len(), 10);
        assert_eq!(response.info.participants[0].puuid, "owner");
        assert_eq!(
            response
                .info
                .participants
                .iter()
                .filter(|p| p.team_id == 100)
                .count(),
            5
        );
    }

    #[test]
    fn test_config_is_valid() {
        assert!(test_config("http://127.0.0.1:9").validate().is_ok());
    }
}
