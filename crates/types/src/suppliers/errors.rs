//! Error types for supplier definitions

use thiserror::Error;

/// Validation errors for supplier configurations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupplierValidationError {
	#[error("Invalid supplier ID: '{supplier_id}'")]
	InvalidSupplierId { supplier_id: String },

	#[error("Invalid endpoint URL: {endpoint} - {reason}")]
	InvalidEndpoint { endpoint: String, reason: String },

	#[error("Invalid timeout: {timeout_ms}ms (must be between {min}ms and {max}ms)")]
	InvalidTimeout { timeout_ms: u64, min: u64, max: u64 },
}

pub type SupplierValidationResult<T> = Result<T, SupplierValidationError>;
