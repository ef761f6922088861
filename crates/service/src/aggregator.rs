//! Sequential aggregation with result caching

use food_types::{
	AdapterError, CacheRetention, Item, ItemCache, ItemQuery, LookupOutcome, SupplierAdapter,
};
use std::sync::Arc;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use crate::errors::{AggregatorError, AggregatorResult};

/// Queries suppliers one at a time in priority order, stopping at the first match
///
/// Only price-qualified queries read from or write to the cache, and they
/// always write pinned entries. Name and quantity lookups are never cached.
pub struct SequentialAggregator {
	adapters: Vec<Arc<dyn SupplierAdapter>>,
	cache: Arc<dyn ItemCache>,
	supplier_timeout: Option<Duration>,
}

impl SequentialAggregator {
	/// Create an aggregator over `adapters`, highest priority first
	pub fn new(adapters: Vec<Arc<dyn SupplierAdapter>>, cache: Arc<dyn ItemCache>) -> Self {
		Self {
			adapters,
			cache,
			supplier_timeout: None,
		}
	}

	/// Bound every individual supplier fetch
	pub fn with_supplier_timeout(mut self, supplier_timeout: Duration) -> Self {
		self.supplier_timeout = Some(supplier_timeout);
		self
	}

	pub fn supplier_count(&self) -> usize {
		self.adapters.len()
	}

	/// Find the first item satisfying `query`, consulting suppliers in order
	///
	/// A failing supplier is logged and skipped. An error is returned only if
	/// the query is invalid or every supplier failed.
	pub async fn find_sequential(&self, query: &ItemQuery) -> AggregatorResult<LookupOutcome> {
		query.validate()?;

		if query.is_price_qualified() {
			if let Some(item) = self.cached_match(query).await {
				return Ok(LookupOutcome::Found(item));
			}
		}

		let mut failures = Vec::new();
		for (priority, adapter) in self.adapters.iter().enumerate() {
			let catalog = match self.fetch(adapter.as_ref()).await {
				Ok(catalog) => catalog,
				Err(e) => {
					warn!(
						"Supplier {} failed during sequential lookup of '{}': {}",
						adapter.supplier_id(),
						query.name,
						e
					);
					failures.push(e);
					continue;
				},
			};

			match catalog.into_match(query) {
				Some(item) => {
					info!(
						"Found '{}' at supplier {} (priority {})",
						item.name,
						adapter.supplier_id(),
						priority
					);
					if query.is_price_qualified() {
						self.remember(&item).await;
					}
					return Ok(LookupOutcome::Found(item));
				},
				None => debug!(
					"Supplier {} has no match for '{}'",
					adapter.supplier_id(),
					query.name
				),
			}
		}

		if !self.adapters.is_empty() && failures.len() == self.adapters.len() {
			return Err(AggregatorError::AllSuppliersFailed { failures });
		}

		info!(
			"No supplier matched '{}' ({} of {} failed)",
			query.name,
			failures.len(),
			self.adapters.len()
		);
		Ok(LookupOutcome::NotFound)
	}

	async fn fetch(
		&self,
		adapter: &dyn SupplierAdapter,
	) -> Result<food_types::SupplierCatalog, AdapterError> {
		let Some(limit) = self.supplier_timeout else {
			return adapter.fetch_catalog().await;
		};

		match timeout(limit, adapter.fetch_catalog()).await {
			Ok(result) => result,
			Err(_) => Err(AdapterError::Timeout {
				supplier_id: adapter.supplier_id().to_string(),
				timeout_ms: limit.as_millis() as u64,
			}),
		}
	}

	/// Cached entry for the query name, if it still satisfies every filter
	async fn cached_match(&self, query: &ItemQuery) -> Option<Item> {
		match self.cache.lookup(&query.name).await {
			Ok(Some(item)) if query.is_satisfied_by(&item) => {
				debug!("Cache hit for '{}'", query.name);
				Some(item)
			},
			Ok(Some(_)) => {
				debug!(
					"Cached '{}' does not satisfy the requested filters, querying suppliers",
					query.name
				);
				None
			},
			Ok(None) => {
				debug!("Cache miss for '{}'", query.name);
				None
			},
			Err(e) => {
				warn!("Cache lookup failed for '{}': {}", query.name, e);
				None
			},
		}
	}

	async fn remember(&self, item: &Item) {
		if let Err(e) = self
			.cache
			.store(&item.name, item.clone(), CacheRetention::Pinned)
			.await
		{
			warn!("Failed to cache '{}': {}", item.name, e);
		}
	}
}
