pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::RiotClient;
pub use cache::ResponseCache;
pub use models::{MatchSummary, PlayerProfile};
