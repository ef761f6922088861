//! Error types for item queries

use thiserror::Error;

/// Reasons a query is rejected before any supplier is contacted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryValidationError {
	#[error("Item name must not be empty")]
	EmptyName,

	#[error("Invalid quantity: {quantity} (must be greater than 0)")]
	NonPositiveQuantity { quantity: i64 },

	#[error("Invalid quantity: '{value}' is not an integer")]
	UnparseableQuantity { value: String },

	#[error("Price must not be empty when provided")]
	EmptyPrice,

	#[error("Malformed request segment: {segment}")]
	MalformedSegment { segment: String },
}

pub type QueryValidationResult<T> = Result<T, QueryValidationError>;
