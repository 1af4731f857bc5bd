//! Failure handling of the player lookup stages.
//!
//! Every stage carries a [`FailurePolicy`]; [`Stage::settle`] applies it to the
//! stage's result so the pipeline code never hand-writes a fallback.

use crate::data_fetcher::models::{
    AccountIdentity, ChampionMastery, LeagueEntry, MatchSummary, SummonerProfile,
};
use crate::error::AppError;
use std::fmt;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The error aborts the lookup and reaches the caller unchanged.
    Propagate,
    /// The error is logged and replaced by an empty value.
    EmptyOnFailure,
    /// The error is logged and replaced by built-in content.
    DefaultOnFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Account,
    Summoner,
    LeagueEntries,
    ChampionMastery,
    MatchHistory,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Account,
        Stage::Summoner,
        Stage::LeagueEntries,
        Stage::ChampionMastery,
        Stage::MatchHistory,
    ];

    pub const fn policy(self) -> FailurePolicy {
        match self {
            Stage::Account | Stage::Summoner => FailurePolicy::Propagate,
            Stage::LeagueEntries | Stage::MatchHistory => FailurePolicy::EmptyOnFailure,
            Stage::ChampionMastery => FailurePolicy::DefaultOnFailure,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stage::Account => "account",
            Stage::Summoner => "summoner",
            Stage::LeagueEntries => "league-entries",
            Stage::ChampionMastery => "champion-mastery",
            Stage::MatchHistory => "match-history",
        }
    }

    /// Applies this stage's policy to `result`.
    ///
    /// If the policy asks for a substitute the value type cannot provide, the
    /// error propagates.
    pub fn settle<T: Fallback>(self, result: Result<T, AppError>) -> Result<T, AppError> {
        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let substitute = match self.policy() {
            FailurePolicy::Propagate => None,
            FailurePolicy::EmptyOnFailure => T::empty(),
            FailurePolicy::DefaultOnFailure => T::default_content(),
        };

        match substitute {
            Some(value) => {
                warn!(
                    stage = self.name(),
                    policy = ?self.policy(),
                    "Stage failed, continuing with substitute: {err}"
                );
                Ok(value)
            }
            None => {
                error!(stage = self.name(), kind = ?err.kind(), "Stage failed: {err}");
                Err(err)
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Substitute values a stage result type can offer when its stage fails.
pub trait Fallback: Sized {
    fn empty() -> Option<Self> {
        None
    }

    fn default_content() -> Option<Self> {
        None
    }
}

impl Fallback for AccountIdentity {}

impl Fallback for SummonerProfile {}

impl Fallback for Vec<LeagueEntry> {
    fn empty() -> Option<Self> {
        Some(Vec::new())
    }
}

impl Fallback for Vec<MatchSummary> {
    fn empty() -> Option<Self> {
        Some(Vec::new())
    }
}

impl Fallback for Vec<ChampionMastery> {
    fn empty() -> Option<Self> {
        Some(Vec::new())
    }

    fn default_content() -> Option<Self> {
        Some(default_champion_masteries())
    }
}

/// Masteries shown when the mastery lookup fails, so the profile is never blank.
pub fn default_champion_masteries() -> Vec<ChampionMastery> {
    // Ahri, Lux, Garen
    [(103, 7, 150_000), (99, 6, 80_000), (86, 5, 45_000)]
        .into_iter()
        .map(|(champion_id, champion_level, champion_points)| ChampionMastery {
            champion_id,
            champion_level,
            champion_points,
        })
        .collect()
}
