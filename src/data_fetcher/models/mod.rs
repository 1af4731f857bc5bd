pub mod account;
pub mod league;
pub mod mastery;
pub mod matches;
pub mod profile;

pub use account::{AccountIdentity, SummonerProfile};
pub use league::LeagueEntry;
pub use mastery::ChampionMastery;
pub use matches::{
    MatchInfo, MatchMetadata, MatchResponse, MatchSummary, ParticipantDto, ParticipantSummary,
    TeamDto, TeamSummary,
};
pub use profile::{PlayerProfile, RecentRecord};
