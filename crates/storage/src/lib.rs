//! Food Aggregator Storage
//!
//! Result cache implementations for the food aggregator.

pub mod memory_store;
pub mod traits;

pub use memory_store::{MemoryStore, DEFAULT_SWEEP_INTERVAL, DEFAULT_TTL};
pub use traits::ItemCache;
