//! Fan-out race across every configured supplier
//!
//! Every supplier is fetched concurrently and the first worker to report a
//! match wins. The winner is whichever task finishes first in wall-clock
//! time, so repeated races over the same suppliers may pick different
//! suppliers. Losing workers are cancelled and aborted before the call
//! returns, and no worker ever touches the result cache.

use food_types::{AdapterError, Item, ItemQuery, LookupOutcome, SupplierAdapter};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::{timeout_at, Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::errors::{AggregatorError, AggregatorResult};

/// Default bound on how long a race waits for any worker to report
pub const DEFAULT_RACE_TIMEOUT: Duration = Duration::from_secs(5);

/// What a single worker observed about its supplier
#[derive(Debug)]
enum WorkerReport {
	Match { supplier_id: String, item: Item },
	NoMatch { supplier_id: String },
	Failed(AdapterError),
}

/// Races all suppliers and keeps the first match
pub struct RaceAggregator {
	adapters: Vec<Arc<dyn SupplierAdapter>>,
	race_timeout: Duration,
}

impl RaceAggregator {
	pub fn new(adapters: Vec<Arc<dyn SupplierAdapter>>, race_timeout: Duration) -> Self {
		Self {
			adapters,
			race_timeout,
		}
	}

	pub fn race_timeout(&self) -> Duration {
		self.race_timeout
	}

	/// Name-only race, as served by the fast-buy endpoint
	pub async fn find_fast(&self, name: &str) -> AggregatorResult<LookupOutcome> {
		self.race(&ItemQuery::by_name(name)).await
	}

	/// Race every supplier for an item satisfying `query`
	///
	/// Returns `TimedOut` if nobody reports a match before the race timeout,
	/// `NotFound` if every worker finished without one, and
	/// `AllSuppliersFailed` if every worker failed.
	pub async fn race(&self, query: &ItemQuery) -> AggregatorResult<LookupOutcome> {
		query.validate()?;

		if self.adapters.is_empty() {
			debug!("No suppliers configured, race for '{}' is empty", query.name);
			return Ok(LookupOutcome::NotFound);
		}

		let cancel = CancellationToken::new();
		let (tx, mut rx) = mpsc::channel(self.adapters.len());
		let mut workers = JoinSet::new();

		for adapter in &self.adapters {
			let adapter = Arc::clone(adapter);
			let cancel = cancel.clone();
			let tx = tx.clone();
			let query = query.clone();

			workers.spawn(async move {
				let supplier_id = adapter.supplier_id().to_string();
				let report = tokio::select! {
					_ = cancel.cancelled() => return,
					result = adapter.fetch_catalog() => match result {
						Ok(catalog) => match catalog.into_match(&query) {
							Some(item) => WorkerReport::Match { supplier_id, item },
							None => WorkerReport::NoMatch { supplier_id },
						},
						Err(e) => WorkerReport::Failed(e),
					},
				};
				// Receiver is gone once a winner was chosen
				let _ = tx.send(report).await;
			});
		}
		drop(tx);

		let deadline = Instant::now() + self.race_timeout;
		let mut failures = Vec::new();
		let outcome = loop {
			match timeout_at(deadline, rx.recv()).await {
				Ok(Some(WorkerReport::Match { supplier_id, item })) => {
					info!("Supplier {} won the race for '{}'", supplier_id, query.name);
					break Ok(LookupOutcome::Found(item));
				},
				Ok(Some(WorkerReport::NoMatch { supplier_id })) => {
					debug!("Supplier {} has no match for '{}'", supplier_id, query.name);
				},
				Ok(Some(WorkerReport::Failed(e))) => {
					warn!("Supplier {:?} dropped out of the race: {}", e.supplier_id(), e);
					failures.push(e);
				},
				Ok(None) if failures.len() == self.adapters.len() => {
					break Err(AggregatorError::AllSuppliersFailed { failures });
				},
				Ok(None) => {
					info!("Race for '{}' finished without a match", query.name);
					break Ok(LookupOutcome::NotFound);
				},
				Err(_) => {
					warn!(
						"Race for '{}' timed out after {}ms",
						query.name,
						self.race_timeout.as_millis()
					);
					break Ok(LookupOutcome::TimedOut);
				},
			}
		};

		cancel.cancel();
		workers.abort_all();
		outcome
	}
}
