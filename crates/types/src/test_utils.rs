//! Test utilities shared by the service, api and integration tests
//!
//! Provides an in-process supplier adapter with call tracking, configurable
//! response delays and failure simulation.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::{AdapterError, AdapterResult, Item, Supplier, SupplierAdapter, SupplierCatalog};

/// Mock supplier that serves a fixed catalog
#[derive(Debug, Clone)]
pub struct MockSupplierAdapter {
	supplier: Supplier,
	items: Vec<Item>,
	response_delay_ms: u64,
	failure: Option<AdapterError>,
	calls: Arc<AtomicUsize>,
	completions: Arc<AtomicUsize>,
}

impl MockSupplierAdapter {
	/// Supplier that answers immediately with `items`
	pub fn with_items(supplier_id: &str, items: Vec<Item>) -> Self {
		Self {
			supplier: Supplier::new(
				supplier_id.to_string(),
				format!("http://localhost/{}", supplier_id),
				3000,
			),
			items,
			response_delay_ms: 0,
			failure: None,
			calls: Arc::new(AtomicUsize::new(0)),
			completions: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Supplier whose fetch fails as if the network were down
	pub fn unavailable(supplier_id: &str) -> Self {
		let mut adapter = Self::with_items(supplier_id, Vec::new());
		adapter.failure = Some(AdapterError::SupplierUnavailable {
			supplier_id: supplier_id.to_string(),
			reason: "connection refused".to_string(),
		});
		adapter
	}

	/// Supplier whose body cannot be decoded
	pub fn malformed(supplier_id: &str) -> Self {
		let mut adapter = Self::with_items(supplier_id, Vec::new());
		adapter.failure = Some(AdapterError::SupplierMalformedResponse {
			supplier_id: supplier_id.to_string(),
			reason: "expected a JSON array".to_string(),
		});
		adapter
	}

	/// Delay every response by `response_delay_ms`
	pub fn with_delay(mut self, response_delay_ms: u64) -> Self {
		self.response_delay_ms = response_delay_ms;
		self
	}

	/// Number of fetches started
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	/// Number of fetches that ran to completion (were not abandoned mid-flight)
	pub fn completed_count(&self) -> usize {
		self.completions.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl SupplierAdapter for MockSupplierAdapter {
	fn supplier_info(&self) -> &Supplier {
		&self.supplier
	}

	async fn fetch_catalog(&self) -> AdapterResult<SupplierCatalog> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		if self.response_delay_ms > 0 {
			tokio::time::sleep(Duration::from_millis(self.response_delay_ms)).await;
		}

		self.completions.fetch_add(1, Ordering::SeqCst);

		match &self.failure {
			Some(error) => Err(error.clone()),
			None => Ok(SupplierCatalog::new(
				self.supplier.supplier_id.clone(),
				self.items.clone(),
			)),
		}
	}
}
