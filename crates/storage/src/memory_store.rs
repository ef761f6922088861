//! In-memory result cache using DashMap with TTL support

use async_trait::async_trait;
use dashmap::DashMap;
use food_types::Item;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::time::{interval, Duration, Instant};
use tracing::{debug, info};

use crate::traits::{CacheRetention, CachedItem, ItemCache, StorageResult};

/// Lifetime of an expiring entry
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
/// How often the background sweep removes expired entries
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
	item: Item,
	/// `None` for pinned entries
	expires_at: Option<Instant>,
}

impl CacheEntry {
	fn is_expired(&self, now: Instant) -> bool {
		self.expires_at.is_some_and(|expires_at| expires_at <= now)
	}

	fn view(&self, now: Instant) -> CachedItem {
		CachedItem {
			item: self.item.clone(),
			retention: match self.expires_at {
				Some(_) => CacheRetention::Expiring,
				None => CacheRetention::Pinned,
			},
			expires_in_ms: self
				.expires_at
				.map(|expires_at| expires_at.saturating_duration_since(now).as_millis() as u64),
		}
	}
}

/// In-memory item cache keyed by item name
#[derive(Debug, Clone)]
pub struct MemoryStore {
	entries: Arc<DashMap<String, CacheEntry>>,
	default_ttl: Duration,
}

impl MemoryStore {
	/// Create a new memory store with the default 5 minute TTL
	pub fn new() -> Self {
		Self::with_ttl(DEFAULT_TTL)
	}

	/// Create a new memory store with a custom TTL for expiring entries
	pub fn with_ttl(default_ttl: Duration) -> Self {
		Self {
			entries: Arc::new(DashMap::new()),
			default_ttl,
		}
	}

	pub fn default_ttl(&self) -> Duration {
		self.default_ttl
	}

	/// Number of stored entries, expired or not
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Start the TTL cleanup task for expired entries
	pub fn start_ttl_cleanup(&self, sweep_interval: Duration) -> tokio::task::JoinHandle<()> {
		let store = self.clone();
		tokio::spawn(async move {
			let mut cleanup_interval = interval(sweep_interval);
			// The first tick completes immediately
			cleanup_interval.tick().await;

			loop {
				cleanup_interval.tick().await;
				store.remove_expired();
			}
		})
	}

	fn remove_expired(&self) -> usize {
		let now = Instant::now();
		let before = self.entries.len();
		self.entries.retain(|_, entry| !entry.is_expired(now));
		let removed = before.saturating_sub(self.entries.len());

		if removed > 0 {
			info!("Cleaned up {} expired cache entries", removed);
		}

		removed
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ItemCache for MemoryStore {
	async fn lookup(&self, name: &str) -> StorageResult<Option<Item>> {
		let now = Instant::now();
		Ok(self
			.entries
			.get(name)
			.filter(|entry| !entry.is_expired(now))
			.map(|entry| entry.item.clone()))
	}

	async fn store(&self, name: &str, item: Item, retention: CacheRetention) -> StorageResult<()> {
		let expires_at = match retention {
			CacheRetention::Expiring => Some(Instant::now() + self.default_ttl),
			CacheRetention::Pinned => None,
		};

		debug!("Caching '{}' ({:?})", name, retention);
		self.entries
			.insert(name.to_string(), CacheEntry { item, expires_at });
		Ok(())
	}

	async fn snapshot(&self) -> StorageResult<BTreeMap<String, CachedItem>> {
		let now = Instant::now();
		Ok(self
			.entries
			.iter()
			.filter(|entry| !entry.value().is_expired(now))
			.map(|entry| (entry.key().clone(), entry.value().view(now)))
			.collect())
	}

	async fn cleanup_expired(&self) -> StorageResult<usize> {
		Ok(self.remove_expired())
	}
}
