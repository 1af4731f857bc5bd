use crate::cli::{Args, parse_riot_id};
use chrono::Local;
use riftstats::config::mask_api_key;
use riftstats::data_fetcher::models::{MatchSummary, ParticipantSummary};
use riftstats::{AppError, Config, PlayerProfile, RiotClient};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Masteries shown in the text profile
const TOP_MASTERIES: usize = 5;

/// Handles the --config command.
pub async fn handle_show_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles the --set-api-key command.
///
/// Works without a usable config: a missing file starts from defaults, so a
/// fresh install can store its first key.
pub async fn handle_set_api_key_command(new_key: &str) -> Result<(), AppError> {
    let new_key = new_key.trim();
    if new_key.is_empty() {
        return Err(AppError::config_error("API key must not be empty"));
    }

    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    config.api_key = new_key.to_string();
    config.save().await?;

    info!("Stored API key {}", mask_api_key(new_key));
    println!("API key {} saved to {config_path}", mask_api_key(new_key));
    Ok(())
}

/// Handles the `GameName#Tag` lookup.
pub async fn handle_profile_command(args: &Args, riot_id: &str) -> Result<(), AppError> {
    let (game_name, tag_line) = parse_riot_id(riot_id)?;
    let client = create_client().await?;

    let profile = client.get_complete_player_data(&game_name, &tag_line).await?;

    if args.json {
        print_json(&profile)
    } else {
        print_profile(&profile);
        Ok(())
    }
}

/// Handles the --matches command.
pub async fn handle_match_ids_command(args: &Args, puuid: &str) -> Result<(), AppError> {
    let client = create_client().await?;
    let ids = client
        .get_match_ids_by_puuid(puuid, args.count, args.start)
        .await?;

    if args.json {
        return print_json(&ids);
    }

    if ids.is_empty() {
        println!("No matches found.");
    }
    for id in &ids {
        println!("{id}");
    }
    Ok(())
}

/// Handles the --match command.
pub async fn handle_match_command(args: &Args, match_id: &str) -> Result<(), AppError> {
    let client = create_client().await?;
    let summary = client.get_match_by_id(match_id).await?;

    if args.json {
        print_json(&summary)
    } else {
        print_match_detail(&summary);
        Ok(())
    }
}

async fn create_client() -> Result<RiotClient, AppError> {
    let config = Config::load().await?;
    RiotClient::new(config)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_profile(profile: &PlayerProfile) {
    println!();
    println!(
        "{}  (level {})",
        profile.account.riot_id(),
        profile.summoner.level
    );
    println!("────────────────────────────────────");

    match profile.solo_queue() {
        Some(solo) => println!(
            "Solo/Duo: {}  {}W {}L  ({})",
            solo.standing(),
            solo.wins,
            solo.losses,
            solo.win_rate()
        ),
        None => println!("Solo/Duo: Unranked"),
    }
    for entry in profile
        .league_entries
        .iter()
        .filter(|e| Some(*e) != profile.solo_queue())
    {
        println!(
            "{}: {}  ({})",
            entry.queue_type,
            entry.standing(),
            entry.win_rate()
        );
    }

    println!("────────────────────────────────────");
    println!("Top champions:");
    for mastery in profile.champion_masteries.iter().take(TOP_MASTERIES) {
        println!(
            "  #{:<5} level {:<3} {:>10} pts",
            mastery.champion_id, mastery.champion_level, mastery.champion_points
        );
    }

    println!("────────────────────────────────────");
    let record = profile.recent_record();
    println!(
        "Recent matches: {}W {}L ({})",
        record.wins,
        record.losses,
        record.win_rate()
    );
    for summary in &profile.recent_matches {
        if let Some(me) = summary.participant(&profile.account.puuid) {
            print_match_line(summary, me);
        }
    }
    println!();
}

fn print_match_line(summary: &MatchSummary, me: &ParticipantSummary) {
    let played = summary
        .played_at()
        .map(|t| t.with_timezone(&Local).format("%d.%m. %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string());
    println!(
        "  {} {:<12} {:>2}/{:>2}/{:>2}  KDA {:>5}  #{} in team  {}  {}",
        if me.win { "W" } else { "L" },
        me.champion_name,
        me.kills,
        me.deaths,
        me.assists,
        me.kda_display,
        me.team_rank,
        summary.duration_display(),
        played
    );
}

fn print_match_detail(summary: &MatchSummary) {
    println!();
    println!(
        "{}  {}  queue {}  {}",
        summary.match_id,
        summary.game_mode,
        summary.queue_id,
        summary.duration_display()
    );
    for team in &summary.teams {
        println!("────────────────────────────────────");
        println!(
            "Team {}  {}",
            team.team_id,
            if team.win { "Victory" } else { "Defeat" }
        );
        let mut members: Vec<&ParticipantSummary> = summary.team_members(team.team_id).collect();
        members.sort_by_key(|p| p.team_rank);
        for p in members {
            println!(
                "  #{} {:<20} {:<12} {:>2}/{:>2}/{:>2}  KDA {:>5}  CS {:>3}",
                p.team_rank,
                format!("{}#{}", p.game_name, p.tag_line),
                p.champion_name,
                p.kills,
                p.deaths,
                p.assists,
                p.kda_display,
                p.creep_score
            );
        }
    }
    println!();
}
