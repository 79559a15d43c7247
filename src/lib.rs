pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::fbref::FbrefClient;
pub use adapters::gemini::GeminiClient;
pub use api::routes::build_router;
pub use config::{AppConfig, CliConfig};
pub use core::search::PlayerSearch;
pub use utils::error::{AppError, Result};
