use std::sync::Arc;

use food_service::{RaceAggregator, SequentialAggregator};
use food_types::ItemCache;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub sequential: Arc<SequentialAggregator>,
	pub race: Arc<RaceAggregator>,
	pub cache: Arc<dyn ItemCache>,
}
