//! Food Aggregator Service
//!
//! Core lookup logic: exhaustive sequential search with result caching, and
//! best-effort racing of every supplier.

pub mod aggregator;
pub mod errors;
pub mod race;

pub use aggregator::SequentialAggregator;
pub use errors::{AggregatorError, AggregatorResult};
pub use race::{RaceAggregator, DEFAULT_RACE_TIMEOUT};
