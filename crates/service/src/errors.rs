//! Aggregation errors

use food_types::{AdapterError, QueryValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregatorError {
	#[error("Invalid query: {0}")]
	InvalidQuery(#[from] QueryValidationError),

	/// Raised only when every configured supplier failed; partial failures
	/// are logged and otherwise invisible to the caller
	#[error("All {} suppliers failed: {}", .failures.len(), describe(.failures))]
	AllSuppliersFailed { failures: Vec<AdapterError> },
}

impl AggregatorError {
	pub fn is_invalid_query(&self) -> bool {
		matches!(self, AggregatorError::InvalidQuery(_))
	}
}

pub type AggregatorResult<T> = Result<T, AggregatorError>;

fn describe(failures: &[AdapterError]) -> String {
	failures
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}
