//! Supplier domain model

pub mod errors;

pub use errors::{SupplierValidationError, SupplierValidationResult};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

use crate::{Item, ItemQuery};

/// Lower bound for a per-supplier fetch timeout
pub const MIN_TIMEOUT_MS: u64 = 10;
/// Upper bound for a per-supplier fetch timeout
pub const MAX_TIMEOUT_MS: u64 = 120_000;

/// An upstream service exposing a catalog of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
	pub supplier_id: String,
	pub endpoint: String,
	pub timeout_ms: u64,
	pub name: Option<String>,
	/// Static headers sent with every catalog fetch
	pub headers: Option<HashMap<String, String>>,
}

impl Supplier {
	pub fn new(supplier_id: String, endpoint: String, timeout_ms: u64) -> Self {
		Self {
			supplier_id,
			endpoint,
			timeout_ms,
			name: None,
			headers: None,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
		self.headers = Some(headers);
		self
	}

	/// Human-readable label, falling back to the id
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or(&self.supplier_id)
	}

	pub fn validate(&self) -> SupplierValidationResult<()> {
		if self.supplier_id.trim().is_empty() {
			return Err(SupplierValidationError::InvalidSupplierId {
				supplier_id: self.supplier_id.clone(),
			});
		}

		let url = Url::parse(&self.endpoint).map_err(|e| SupplierValidationError::InvalidEndpoint {
			endpoint: self.endpoint.clone(),
			reason: e.to_string(),
		})?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(SupplierValidationError::InvalidEndpoint {
				endpoint: self.endpoint.clone(),
				reason: format!("unsupported scheme '{}'", url.scheme()),
			});
		}

		if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&self.timeout_ms) {
			return Err(SupplierValidationError::InvalidTimeout {
				timeout_ms: self.timeout_ms,
				min: MIN_TIMEOUT_MS,
				max: MAX_TIMEOUT_MS,
			});
		}

		Ok(())
	}
}

/// Decoded body of one supplier response, discarded after each query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierCatalog {
	pub supplier_id: String,
	pub items: Vec<Item>,
}

impl SupplierCatalog {
	pub fn new(supplier_id: impl Into<String>, items: Vec<Item>) -> Self {
		Self {
			supplier_id: supplier_id.into(),
			items,
		}
	}

	/// First item in catalog order satisfying `query`
	pub fn find(&self, query: &ItemQuery) -> Option<&Item> {
		self.items.iter().find(|item| query.is_satisfied_by(item))
	}

	/// Consume the catalog, keeping only the first match
	pub fn into_match(self, query: &ItemQuery) -> Option<Item> {
		self.items
			.into_iter()
			.find(|item| query.is_satisfied_by(item))
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
