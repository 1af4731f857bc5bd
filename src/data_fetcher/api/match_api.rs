use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

use super::client::RiotClient;
use crate::data_fetcher::models::MatchSummary;

impl RiotClient {
    /// Resolves `match_ids` into match summaries with at most `limit` requests
    /// in flight.
    ///
    /// Output keeps the input order. A match that fails to load (after the
    /// HTTP layer's own retries) is logged and left out; nothing propagates.
    #[instrument(skip(self, match_ids), fields(requested = match_ids.len()))]
    pub async fn expand_matches(&self, match_ids: &[String], limit: usize) -> Vec<MatchSummary> {
        let results: Vec<Option<MatchSummary>> = stream::iter(match_ids)
            .map(|match_id| async move {
                match self.get_match_by_id(match_id).await {
                    Ok(summary) => Some(summary),
                    Err(e) => {
                        warn!("Dropping match {} from results: {}", match_id, e);
                        None
                    }
                }
            })
            .buffered(limit.max(1))
            .collect()
            .await;

        let matches: Vec<MatchSummary> = results.into_iter().flatten().collect();
        info!(
            "Expanded {}/{} matches",
            matches.len(),
            match_ids.len()
        );
        matches
    }
}
