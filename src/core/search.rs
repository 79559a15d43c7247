use std::sync::Arc;

use crate::core::mapper;
use crate::domain::model::{PlayerRecord, SearchResponse, SearchResult};
use crate::domain::ports::{StatsProvider, Summarizer};
use crate::utils::error::{AppError, Result};

/// Minimum query length after trimming.
pub const MIN_QUERY_LEN: usize = 3;

/// Cap on the unfiltered listing returned for an empty query.
const UNFILTERED_LIMIT: usize = 5;

/// Search-and-enrich service: fetch season stats, map the rows, filter by
/// player name, and attach a generated summary to each match. Collaborators
/// are injected once at startup and shared across requests.
pub struct PlayerSearch {
    provider: Arc<dyn StatsProvider>,
    summarizer: Arc<dyn Summarizer>,
    stat_type: String,
}

impl PlayerSearch {
    pub fn new(
        provider: Arc<dyn StatsProvider>,
        summarizer: Arc<dyn Summarizer>,
        stat_type: String,
    ) -> Self {
        Self {
            provider,
            summarizer,
            stat_type,
        }
    }

    pub async fn list(&self, query: &str) -> Result<SearchResponse> {
        let rows = self
            .provider
            .fetch_player_season_stats(&self.stat_type)
            .await?;
        tracing::debug!("Fetched {} rows for stat_type {}", rows.len(), self.stat_type);

        let records = rows.iter().map(mapper::map_row).collect::<Result<Vec<_>>>()?;

        let query = query.trim();
        if query.is_empty() {
            let top: Vec<PlayerRecord> = records.into_iter().take(UNFILTERED_LIMIT).collect();
            return Ok(SearchResponse::Unfiltered(top));
        }

        if query.chars().count() < MIN_QUERY_LEN {
            return Err(AppError::ValidationError {
                message: format!(
                    "Search query must be at least {} characters long",
                    MIN_QUERY_LEN
                ),
            });
        }

        let needle = query.to_lowercase();
        let matches: Vec<PlayerRecord> = records
            .into_iter()
            .filter(|record| record.player.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            return Err(AppError::NotFoundError {
                message: "Player not found".to_string(),
            });
        }

        // One generate call per match, issued sequentially in match order.
        // A failed call becomes the summary text; it never fails the search.
        let mut results = Vec::with_capacity(matches.len());
        for record in matches {
            let summary = match self.summarizer.generate(&summary_prompt(&record)).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Summary generation failed for {}: {}", record.player, e);
                    format!("Error generating summary: {}", e)
                }
            };
            results.push(SearchResult {
                player_stats: record,
                summary,
            });
        }

        Ok(SearchResponse::Enriched(results))
    }
}

fn summary_prompt(record: &PlayerRecord) -> String {
    format!(
        "Write a short factual summary of this soccer player's season. \
         Player: {}, team: {}, position: {}, league: {}, season: {}. \
         Appearances: {} ({} starts, {} minutes). \
         Goals: {}, assists: {}, penalties scored: {}, yellow cards: {}, red cards: {}. \
         Expected goals (xG): {:.2}, expected assists (xAG): {:.2}. \
         Progressive carries: {}, progressive passes: {}.",
        record.player,
        record.team,
        record.pos,
        record.league,
        record.season,
        record.playing_time.matches_played,
        record.playing_time.starts,
        record.playing_time.minutes,
        record.performance.goals,
        record.performance.assists,
        record.performance.penalties_scored,
        record.performance.yellow_cards,
        record.performance.red_cards,
        record.expected.xg,
        record.expected.xag,
        record.progression.carries,
        record.progression.passes,
    )
}
