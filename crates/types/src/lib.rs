//! Food Aggregator Types
//!
//! Shared models and traits for the food aggregator.
//! This crate contains the canonical item model, supplier definitions,
//! the adapter and cache seams, and the error taxonomy used across layers.

pub mod adapters;
pub mod items;
pub mod lookup;
pub mod storage;
pub mod suppliers;
pub mod test_utils;

// Re-export serde_json for convenience
pub use serde_json;

pub use items::{
	Item, ItemQuery, QueryValidationError, QueryValidationResult, CANONICAL_FIELDS,
};

pub use suppliers::{
	Supplier, SupplierCatalog, SupplierValidationError, SupplierValidationResult,
};

pub use adapters::{AdapterError, AdapterResult, SupplierAdapter};

pub use lookup::LookupOutcome;

pub use storage::{CacheRetention, CachedItem, ItemCache, StorageError, StorageResult};
