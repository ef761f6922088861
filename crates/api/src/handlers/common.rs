use axum::{http::StatusCode, response::Json};
use food_service::AggregatorError;
use food_types::{Item, LookupOutcome};
use serde::Serialize;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
	(
		status,
		Json(ErrorResponse {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}),
	)
}

/// Map a lookup result onto the HTTP contract
///
/// `NotFound` is 404, race timeouts are 504, invalid queries are 400 and a
/// total supplier outage is 502.
pub fn lookup_response(
	name: &str,
	result: Result<LookupOutcome, AggregatorError>,
) -> Result<Json<Item>, ApiError> {
	match result {
		Ok(LookupOutcome::Found(item)) => Ok(Json(item)),
		Ok(LookupOutcome::NotFound) => Err(error_response(
			StatusCode::NOT_FOUND,
			"NOT_FOUND",
			format!("No supplier has a matching '{}'", name),
		)),
		Ok(LookupOutcome::TimedOut) => Err(error_response(
			StatusCode::GATEWAY_TIMEOUT,
			"TIMEOUT",
			format!("No supplier answered for '{}' in time", name),
		)),
		Err(e @ AggregatorError::InvalidQuery(_)) => Err(error_response(
			StatusCode::BAD_REQUEST,
			"INVALID_REQUEST",
			e.to_string(),
		)),
		Err(e @ AggregatorError::AllSuppliersFailed { .. }) => Err(error_response(
			StatusCode::BAD_GATEWAY,
			"SUPPLIERS_UNAVAILABLE",
			e.to_string(),
		)),
	}
}
