use std::sync::Arc;

use clap::Parser;
use player_search::utils::{logger, validation::Validate};
use player_search::{build_router, AppConfig, CliConfig, FbrefClient, GeminiClient, PlayerSearch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_server_logger(cli.verbose);
    }

    tracing::info!("Starting player-search");

    let config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed to resolve: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let provider = Arc::new(FbrefClient::new(
        &config.stats_endpoint,
        &config.league,
        &config.season,
        config.timeout_seconds,
    )?);
    let summarizer = Arc::new(GeminiClient::new(
        &config.gemini_api_key,
        &config.gemini_model,
        config.timeout_seconds,
    )?);
    let search = Arc::new(PlayerSearch::new(
        provider,
        summarizer,
        config.stat_type.clone(),
    ));

    let app = build_router(search);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("player-search listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
