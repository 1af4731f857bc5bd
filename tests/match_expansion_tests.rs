//! Match-detail expansion and derived per-match stats.

use riftstats::RiotClient;
use riftstats::data_fetcher::models::MatchResponse;
use riftstats::data_fetcher::processors::build_match_summary;
use riftstats::testing_utils::{TestDataBuilder, test_config};
use std::time::{Duration, Instant};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn match_ids(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("EUW1_{i}")).collect()
}

#[tokio::test]
async fn test_fifteen_ids_two_failing_yields_thirteen() {
    let server = MockServer::start().await;
    let ids = match_ids(15);

    for (i, id) in ids.iter().enumerate() {
        let template = match i {
            3 => ResponseTemplate::new(404),
            9 => ResponseTemplate::new(500),
            _ => ResponseTemplate::new(200)
                .set_body_json(TestDataBuilder::match_response(id, "puuid-0", i % 2 == 0)),
        };
        Mock::given(method("GET"))
            .and(path(format!("/lol/match/v5/matches/{id}")))
            .respond_with(template)
            .mount(&server)
            .await;
    }

    let client = RiotClient::new(test_config(&server.uri())).unwrap();
    let matches = client.expand_matches(&ids, 15).await;

    assert_eq!(matches.len(), 13);
    let returned: Vec<&str> = matches.iter().map(|m| m.match_id.as_str()).collect();
    let expected: Vec<&str> = ids
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 3 && *i != 9)
        .map(|(_, id)| id.as_str())
        .collect();
    assert_eq!(returned, expected);
}

#[tokio::test]
async fn test_in_flight_requests_stay_within_limit() {
    let server = MockServer::start().await;
    let ids = match_ids(6);
    for id in &ids {
        Mock::given(method("GET"))
            .and(path(format!("/lol/match/v5/matches/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(TestDataBuilder::match_response(id, "puuid-0", true))
                    .set_delay(Duration::from_millis(100)),
            )
            .mount(&server)
            .await;
    }

    let client = RiotClient::new(test_config(&server.uri())).unwrap();
    let started = Instant::now();
    let matches = client.expand_matches(&ids, 2).await;

    assert_eq!(matches.len(), 6);
    // Two at a time means at least three rounds of 100ms
    assert!(started.elapsed() >= Duration::from_millis(300));
}

#[test]
fn test_rank_within_team_follows_kda() {
    let mut response: MatchResponse = TestDataBuilder::match_response("EUW1_1", "puuid-0", true);
    // KDAs on team 100 become 1, 5, 3, 2, 4
    let kills = [1, 5, 3, 2, 4];
    for (participant, k) in response
        .info
        .participants
        .iter_mut()
        .filter(|p| p.team_id == 100)
        .zip(kills)
    {
        participant.kills = k;
        participant.deaths = 1;
        participant.assists = 0;
    }

    let summary = build_match_summary(response);
    let ranks: Vec<usize> = summary.team_members(100).map(|p| p.team_rank).collect();

    assert_eq!(ranks, vec![5, 1, 3, 4, 2]);
}

#[test]
fn test_zero_deaths_kda_and_team_win() {
    let mut response = TestDataBuilder::match_response("EUW1_2", "puuid-0", false);
    let owner = &mut response.info.participants[0];
    owner.kills = 5;
    owner.deaths = 0;
    owner.assists = 3;

    let summary = build_match_summary(response);
    let owner = summary.participant("puuid-0").unwrap();

    assert_eq!(owner.kda, 8.0);
    assert_eq!(owner.kda_display, "8.00");
    assert!(!owner.win);
    assert!(summary.team_members(200).all(|p| p.win));
}
