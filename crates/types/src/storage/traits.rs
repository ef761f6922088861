//! Cache trait for pluggable result caches

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

use super::StorageResult;
use crate::Item;

/// How long a stored entry is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheRetention {
	/// Expires after the cache's default TTL and is removed by the sweep
	Expiring,
	/// Never expires; only replaced by an explicit overwrite
	Pinned,
}

/// Point-in-time view of one live cache entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedItem {
	pub item: Item,
	pub retention: CacheRetention,
	/// Time left before expiry, `None` for pinned entries
	pub expires_in_ms: Option<u64>,
}

/// Process-wide memo of previously matched items, keyed by item name
///
/// Implementations must be safe to share between concurrent requests
/// without any locking by the caller.
#[async_trait]
pub trait ItemCache: Send + Sync {
	/// Return the live entry for `name`, ignoring anything already expired
	///
	/// Does not evict; expired entries are left for the sweep.
	async fn lookup(&self, name: &str) -> StorageResult<Option<Item>>;

	/// Insert or overwrite the entry for `name`
	async fn store(&self, name: &str, item: Item, retention: CacheRetention) -> StorageResult<()>;

	/// All live entries
	async fn snapshot(&self) -> StorageResult<BTreeMap<String, CachedItem>>;

	/// Remove expired entries, returning how many were evicted
	async fn cleanup_expired(&self) -> StorageResult<usize>;

	/// Check storage health
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(true)
	}
}
