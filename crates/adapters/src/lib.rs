//! Food Aggregator Adapters
//!
//! Supplier-facing adapters: payload normalization and the HTTP catalog client.

pub mod http_adapter;
pub mod normalizer;

pub use food_types::{AdapterError, AdapterResult, SupplierAdapter};
pub use http_adapter::HttpSupplierAdapter;
pub use normalizer::{SchemaNormalizer, CANONICAL_FIELDS, DEFAULT_SYNONYMS};

use food_types::Supplier;
use std::sync::Arc;
use tracing::info;

/// Supplier adapters in priority order
///
/// Registration order is the order the sequential aggregator consults
/// suppliers in.
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
	adapters: Vec<Arc<dyn SupplierAdapter>>,
}

impl AdapterRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build one HTTP adapter per supplier, keeping the given order
	pub fn from_suppliers(
		suppliers: Vec<Supplier>,
		normalizer: Arc<SchemaNormalizer>,
	) -> AdapterResult<Self> {
		let mut registry = Self::new();
		for supplier in suppliers {
			let adapter = HttpSupplierAdapter::new(supplier, Arc::clone(&normalizer))?;
			registry.register(Arc::new(adapter))?;
		}
		Ok(registry)
	}

	/// Append an adapter at the lowest priority
	pub fn register(&mut self, adapter: Arc<dyn SupplierAdapter>) -> AdapterResult<()> {
		let supplier_id = adapter.supplier_id().to_string();
		if self.get(&supplier_id).is_some() {
			return Err(AdapterError::DuplicateSupplier { supplier_id });
		}

		info!(
			"Registered supplier '{}' at priority {}",
			supplier_id,
			self.adapters.len()
		);
		self.adapters.push(adapter);
		Ok(())
	}

	pub fn get(&self, supplier_id: &str) -> Option<Arc<dyn SupplierAdapter>> {
		self.adapters
			.iter()
			.find(|adapter| adapter.supplier_id() == supplier_id)
			.cloned()
	}

	/// All adapters, highest priority first
	pub fn adapters(&self) -> &[Arc<dyn SupplierAdapter>] {
		&self.adapters
	}

	pub fn supplier_ids(&self) -> Vec<String> {
		self.adapters
			.iter()
			.map(|adapter| adapter.supplier_id().to_string())
			.collect()
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}
