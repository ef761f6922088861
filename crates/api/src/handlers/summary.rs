//! Cache summary handler

use axum::{extract::State, http::StatusCode, response::Json};
use food_types::CachedItem;
use std::collections::BTreeMap;
use tracing::warn;

use crate::handlers::common::{error_response, ApiError};
use crate::state::AppState;

/// GET /show-summary - Every live cache entry keyed by item name
pub async fn show_summary(
	State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, CachedItem>>, ApiError> {
	let snapshot = state.cache.snapshot().await.map_err(|e| {
		warn!("Failed to read cache snapshot: {}", e);
		error_response(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string())
	})?;
	Ok(Json(snapshot))
}
