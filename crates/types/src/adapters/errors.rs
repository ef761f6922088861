//! Error types for supplier fetches

use thiserror::Error;

use crate::SupplierValidationError;

/// Failures raised while fetching or decoding one supplier catalog
///
/// These are always scoped to a single supplier and are never fatal to the
/// aggregation as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
	#[error("Supplier {supplier_id} unavailable: {reason}")]
	SupplierUnavailable { supplier_id: String, reason: String },

	#[error("Supplier {supplier_id} returned HTTP {status_code}")]
	HttpStatusError { supplier_id: String, status_code: u16 },

	#[error("Supplier {supplier_id} timed out after {timeout_ms}ms")]
	Timeout { supplier_id: String, timeout_ms: u64 },

	#[error("Supplier {supplier_id} returned a malformed response: {reason}")]
	SupplierMalformedResponse { supplier_id: String, reason: String },

	#[error("Adapter initialization failed: {supplier_id} - {reason}")]
	InitializationFailed { supplier_id: String, reason: String },

	#[error("Supplier already registered: {supplier_id}")]
	DuplicateSupplier { supplier_id: String },

	#[error("Supplier validation failed: {0}")]
	Validation(#[from] SupplierValidationError),
}

impl AdapterError {
	/// Supplier the failure belongs to, when known
	pub fn supplier_id(&self) -> Option<&str> {
		match self {
			AdapterError::SupplierUnavailable { supplier_id, .. }
			| AdapterError::HttpStatusError { supplier_id, .. }
			| AdapterError::Timeout { supplier_id, .. }
			| AdapterError::SupplierMalformedResponse { supplier_id, .. }
			| AdapterError::InitializationFailed { supplier_id, .. }
			| AdapterError::DuplicateSupplier { supplier_id } => Some(supplier_id),
			AdapterError::Validation(_) => None,
		}
	}

	/// Network-level failure: the supplier could not be reached or refused to answer
	pub fn is_unavailable(&self) -> bool {
		matches!(
			self,
			AdapterError::SupplierUnavailable { .. }
				| AdapterError::HttpStatusError { .. }
				| AdapterError::Timeout { .. }
		)
	}

	/// The supplier answered but its body could not be decoded
	pub fn is_malformed(&self) -> bool {
		matches!(self, AdapterError::SupplierMalformedResponse { .. })
	}

	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::HttpStatusError { status_code, .. } => Some(*status_code),
			_ => None,
		}
	}
}
