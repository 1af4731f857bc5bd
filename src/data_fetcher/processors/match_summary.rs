use super::stats::{calculate_kda, format_kda};
use crate::data_fetcher::models::{
    MatchResponse, MatchSummary, ParticipantDto, ParticipantSummary, TeamDto, TeamSummary,
};
use std::collections::HashMap;
use tracing::debug;

/// Converts an upstream match into a [`MatchSummary`], attaching per-participant
/// KDA, rank within team and the team win flag.
///
/// Recomputed on every call; the derived values are never cached.
pub fn build_match_summary(response: MatchResponse) -> MatchSummary {
    let MatchResponse { metadata, info } = response;

    let mut participants: Vec<ParticipantSummary> = info
        .participants
        .into_iter()
        .map(|p| summarize_participant(p, &info.teams))
        .collect();
    assign_team_ranks(&mut participants);

    debug!(
        "Built summary for match {}: {} participants, {} teams",
        metadata.match_id,
        participants.len(),
        info.teams.len()
    );

    MatchSummary {
        match_id: metadata.match_id,
        game_creation: info.game_creation,
        game_duration: info.game_duration,
        game_mode: info.game_mode,
        queue_id: info.queue_id,
        participants,
        teams: info
            .teams
            .iter()
            .map(|t| TeamSummary {
                team_id: t.team_id,
                win: t.win,
            })
            .collect(),
    }
}

fn summarize_participant(p: ParticipantDto, teams: &[TeamDto]) -> ParticipantSummary {
    let items = p.items();
    ParticipantSummary {
        kda: calculate_kda(p.kills, p.deaths, p.assists),
        kda_display: format_kda(p.kills, p.deaths, p.assists),
        team_rank: 0,
        win: team_won(teams, p.team_id),
        creep_score: p.total_minions_killed + p.neutral_minions_killed,
        items,
        puuid: p.puuid,
        game_name: p.riot_id_game_name,
        tag_line: p.riot_id_tagline,
        champion_id: p.champion_id,
        champion_name: p.champion_name,
        team_id: p.team_id,
        kills: p.kills,
        deaths: p.deaths,
        assists: p.assists,
        gold_earned: p.gold_earned,
    }
}

/// Win flag of the team with `team_id`; a team missing from the list counts as a loss.
pub fn team_won(teams: &[TeamDto], team_id: i32) -> bool {
    teams
        .iter()
        .find(|t| t.team_id == team_id)
        .is_some_and(|t| t.win)
}

/// Ranks players within their own team by descending KDA, starting at 1.
///
/// Equal KDAs keep their participant order.
pub fn assign_team_ranks(participants: &mut [ParticipantSummary]) {
    let mut by_team: HashMap<i32, Vec<usize>> = HashMap::new();
    for (index, p) in participants.iter().enumerate() {
        by_team.entry(p.team_id).or_default().push(index);
    }

    for indices in by_team.values_mut() {
        indices.sort_by(|&a, &b| participants[b].kda.total_cmp(&participants[a].kda));
        for (position, &index) in indices.iter().enumerate() {
            participants[index].team_rank = position + 1;
        }
    }
}
