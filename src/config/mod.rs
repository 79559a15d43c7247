pub mod file;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::file::FileConfig;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "player-search")]
#[command(about = "Season stats search service with generated player summaries")]
pub struct CliConfig {
    /// Optional TOML config file; file values take precedence over flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "0.0.0.0:8000")]
    pub bind_addr: String,

    #[arg(long, default_value = "https://fbrapi.example.com/api")]
    pub stats_endpoint: String,

    #[arg(long, default_value = "ENG-Premier League")]
    pub league: String,

    #[arg(long, default_value = "2024")]
    pub season: String,

    #[arg(long, default_value = "standard")]
    pub stat_type: String,

    /// Gemini API key; falls back to the GEMINI_API_KEY environment variable
    #[arg(long)]
    pub gemini_api_key: Option<String>,

    #[arg(long, default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully resolved runtime configuration: CLI flags, optional config file,
/// and environment merged into one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub bind_addr: String,
    pub stats_endpoint: String,
    pub league: String,
    pub season: String,
    pub stat_type: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub timeout_seconds: u64,
}

impl AppConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = FileConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let gemini_api_key = file
            .as_ref()
            .and_then(|f| f.summarizer.as_ref().and_then(|s| s.api_key.clone()))
            .or_else(|| cli.gemini_api_key.clone())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| AppError::MissingConfigError {
                field: "gemini_api_key".to_string(),
            })?;

        Ok(Self {
            bind_addr: file
                .as_ref()
                .and_then(|f| f.server.as_ref().and_then(|s| s.bind_addr.clone()))
                .unwrap_or_else(|| cli.bind_addr.clone()),
            stats_endpoint: file
                .as_ref()
                .map(|f| f.provider.endpoint.clone())
                .unwrap_or_else(|| cli.stats_endpoint.clone()),
            league: file
                .as_ref()
                .and_then(|f| f.provider.league.clone())
                .unwrap_or_else(|| cli.league.clone()),
            season: file
                .as_ref()
                .and_then(|f| f.provider.season.clone())
                .unwrap_or_else(|| cli.season.clone()),
            stat_type: file
                .as_ref()
                .and_then(|f| f.provider.stat_type.clone())
                .unwrap_or_else(|| cli.stat_type.clone()),
            gemini_api_key,
            gemini_model: file
                .as_ref()
                .and_then(|f| f.summarizer.as_ref().and_then(|s| s.model.clone()))
                .unwrap_or_else(|| cli.gemini_model.clone()),
            timeout_seconds: file
                .as_ref()
                .and_then(|f| f.provider.timeout_seconds)
                .unwrap_or(cli.timeout_seconds),
        })
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("bind_addr", &self.bind_addr)?;
        validation::validate_url("stats_endpoint", &self.stats_endpoint)?;
        validation::validate_non_empty_string("league", &self.league)?;
        validation::validate_non_empty_string("season", &self.season)?;
        validation::validate_non_empty_string("stat_type", &self.stat_type)?;
        validation::validate_non_empty_string("gemini_model", &self.gemini_model)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
