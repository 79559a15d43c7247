use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::model::Row;
use crate::domain::ports::StatsProvider;
use crate::utils::error::{AppError, Result};

/// HTTP client for the FBref-style season stats API. League and season are
/// pinned at construction; only the stat category varies per fetch.
#[derive(Debug, Clone)]
pub struct FbrefClient {
    client: Client,
    base_url: String,
    league: String,
    season: String,
}

impl FbrefClient {
    pub fn new(base_url: &str, league: &str, season: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            league: league.to_string(),
            season: season.to_string(),
        })
    }
}

#[async_trait]
impl StatsProvider for FbrefClient {
    async fn fetch_player_season_stats(&self, category: &str) -> Result<Vec<Row>> {
        let url = format!("{}/player-season-stats", self.base_url);
        tracing::debug!("Fetching {} stats from {}", category, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("league", self.league.as_str()),
                ("season", self.season.as_str()),
                ("stat_type", category),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Stats API response status: {}", status);

        // The provider answers 400/404 for a stat category it does not serve.
        if status == StatusCode::BAD_REQUEST || status == StatusCode::NOT_FOUND {
            return Err(AppError::InvalidCategoryError {
                category: category.to_string(),
            });
        }

        let body = response.error_for_status()?.text().await?;
        parse_rows(&body)
    }
}

/// Parse the provider's CSV body into positional rows. The header line is
/// skipped; arity is checked by the mapper, so short rows pass through here.
fn parse_rows(csv_text: &str) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(Row::new(record.iter().map(str::to_string).collect()));
    }
    Ok(rows)
}
