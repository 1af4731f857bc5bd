pub mod match_summary;
pub mod stage_policy;
pub mod stats;

pub use match_summary::{assign_team_ranks, build_match_summary, team_won};
pub use stage_policy::{Fallback, FailurePolicy, Stage, default_champion_masteries};
pub use stats::{calculate_kda, format_kda, format_win_rate};
