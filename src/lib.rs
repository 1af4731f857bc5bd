//! League of Legends player statistics client
//!
//! This library resolves a Riot ID into a composed player profile (account,
//! summoner, ranked entries, champion masteries and recent matches) through
//! the Riot Games HTTP API, with response caching, retry with exponential
//! backoff and per-match derived stats.
//!
//! # Examples
//!
//! ```rust,no_run
//! use riftstats::{AppError, Config, RiotClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = RiotClient::new(Config::load().await?)?;
//!     let profile = client.get_complete_player_data("Agurin", "EUW").await?;
//!
//!     if let Some(solo) = profile.solo_queue() {
//!         println!("{} ({})", solo.standing(), solo.win_rate());
//!     }
//!     for summary in &profile.recent_matches {
//!         if let Some(me) = summary.participant(&profile.account.puuid) {
//!             println!("{} {} KDA {}", summary.match_id, me.champion_name, me.kda_display);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::RiotClient;
pub use data_fetcher::api::RetryPolicy;
pub use data_fetcher::cache::ResponseCache;
pub use data_fetcher::models::{MatchSummary, PlayerProfile};
pub use error::{AppError, ErrorKind};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
