use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::search::PlayerSearch;
use crate::utils::error::AppError;

/// Query parameters for the players endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Build the application router. One route: GET /players. Any other method
/// on the route answers 400 rather than the framework's default 405.
pub fn build_router(search: Arc<PlayerSearch>) -> Router {
    Router::new()
        .route("/players", get(search_players).fallback(invalid_method))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any)),
        )
        .with_state(search)
}

async fn search_players(
    State(search): State<Arc<PlayerSearch>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    match search.list(&query).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn invalid_method() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Invalid request method" })),
    )
        .into_response()
}

fn error_response(error: &AppError) -> Response {
    let status = match error {
        AppError::ValidationError { .. }
        | AppError::NotFoundError { .. }
        | AppError::InvalidCategoryError { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Request failed: {}", error);
    }

    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
