use axum::{extract::State, http::StatusCode, response::Html, response::Json};
use serde::Serialize;

use crate::state::AppState;

pub async fn welcome() -> Html<&'static str> {
	Html("<h1>Welcome to Food Aggregator</h1>")
}

/// Health check endpoint
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
	pub status: String,
	pub cache_healthy: bool,
	pub suppliers: usize,
}

/// GET /ready - Readiness probe with a cache check
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let cache_healthy = state.cache.health_check().await.unwrap_or(false);
	let (code, status) = if cache_healthy {
		(StatusCode::OK, "ready")
	} else {
		(StatusCode::SERVICE_UNAVAILABLE, "degraded")
	};

	let body = ReadinessResponse {
		status: status.to_string(),
		cache_healthy,
		suppliers: state.sequential.supplier_count(),
	};
	(code, Json(body))
}
