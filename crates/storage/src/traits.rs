//! Cache traits for pluggable result caches

// Re-export the cache traits from types crate
pub use food_types::storage::{
	CacheRetention, CachedItem, ItemCache, StorageError, StorageResult,
};
