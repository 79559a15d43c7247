use crate::domain::model::Row;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound port for the season-stats provider.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetch every player row for one stats category, e.g. "standard".
    /// Fails when the provider rejects the category; no retry.
    async fn fetch_player_season_stats(&self, category: &str) -> Result<Vec<Row>>;
}

/// Outbound port for the text-generation service behind summaries.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
