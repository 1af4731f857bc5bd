use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use riftstats::AppError;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// League of Legends player statistics
///
/// Looks up a player by Riot ID and prints their level, ranked standing,
/// top champion masteries and recent matches with per-game KDA.
///
/// The Riot API key is read from the config file or the RIOT_API_KEY
/// environment variable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Riot ID of the player, e.g. "Agurin#EUW"
    #[arg(value_name = "GAME_NAME#TAG")]
    pub riot_id: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long = "json", short = 'j', help_heading = "Output")]
    pub json: bool,

    /// List match ids for a PUUID
    #[arg(long = "matches", value_name = "PUUID", help_heading = "Lookups")]
    pub matches_for: Option<String>,

    /// Number of match ids to list with --matches
    #[arg(
        long = "count",
        default_value_t = 20,
        requires = "matches_for",
        help_heading = "Lookups"
    )]
    pub count: u32,

    /// Offset into the match history with --matches
    #[arg(
        long = "start",
        default_value_t = 0,
        requires = "matches_for",
        help_heading = "Lookups"
    )]
    pub start: u32,

    /// Show one match by id, e.g. "EUW1_7012345678"
    #[arg(long = "match", value_name = "MATCH_ID", help_heading = "Lookups")]
    pub match_id: Option<String>,

    /// Show current configuration (the API key is masked)
    #[arg(long = "config", help_heading = "Configuration")]
    pub show_config: bool,

    /// Save a Riot API key to the config file
    #[arg(long = "set-api-key", value_name = "KEY", help_heading = "Configuration")]
    pub new_api_key: Option<String>,

    /// Also write logs to the terminal
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// Splits "GameName#TagLine" at the last `#`. Game names may contain `#`,
/// tag lines may not.
pub fn parse_riot_id(riot_id: &str) -> Result<(String, String), AppError> {
    let (game_name, tag_line) = riot_id.rsplit_once('#').ok_or_else(|| {
        AppError::config_error(format!(
            "Riot ID '{riot_id}' must be in the form GameName#TagLine"
        ))
    })?;

    let game_name = game_name.trim();
    let tag_line = tag_line.trim();
    if game_name.is_empty() || tag_line.is_empty() {
        return Err(AppError::config_error(format!(
            "Riot ID '{riot_id}' has an empty game name or tag line"
        )));
    }

    Ok((game_name.to_string(), tag_line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_riot_id() {
        assert_eq!(
            parse_riot_id("Agurin#EUW").unwrap(),
            ("Agurin".to_string(), "EUW".to_string())
        );
        assert_eq!(
            parse_riot_id("Hide on bush#KR1").unwrap(),
            ("Hide on bush".to_string(), "KR1".to_string())
        );
        assert_eq!(
            parse_riot_id("a#b#TAG").unwrap(),
            ("a#b".to_string(), "TAG".to_string())
        );
    }

    #[test]
    fn test_parse_riot_id_rejects_malformed() {
        assert!(parse_riot_id("NoTag").is_err());
        assert!(parse_riot_id("#EUW").is_err());
        assert!(parse_riot_id("Agurin#").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["riftstats", "Agurin#EUW", "--json"]);
        assert_eq!(args.riot_id.as_deref(), Some("Agurin#EUW"));
        assert!(args.json);

        let args = Args::parse_from(["riftstats", "--matches", "puuid-0", "--count", "5"]);
        assert_eq!(args.matches_for.as_deref(), Some("puuid-0"));
        assert_eq!(args.count, 5);
        assert_eq!(args.start, 0);
    }

    #[test]
    fn test_count_requires_matches() {
        assert!(Args::try_parse_from(["riftstats", "--count", "5"]).is_err());
    }
}
