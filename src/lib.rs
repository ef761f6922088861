//! Food Aggregator Library
//!
//! Looks items up across several upstream supplier catalogs, either one
//! supplier at a time in priority order or by racing all of them.

// Core domain types
pub use food_types::{
	serde_json, AdapterError, CacheRetention, CachedItem, Item, ItemCache, ItemQuery,
	LookupOutcome, QueryValidationError, Supplier, SupplierAdapter, SupplierCatalog,
};

pub use food_service::{AggregatorError, RaceAggregator, SequentialAggregator};
pub use food_storage::MemoryStore;
pub use food_api::{create_router, AppState};
pub use food_adapters::{AdapterRegistry, HttpSupplierAdapter, SchemaNormalizer};
pub use food_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

pub mod test_utils {
	pub use food_types::test_utils::*;
}

use food_config::LogFormat;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Builder for wiring suppliers, cache and HTTP surface together
#[derive(Default)]
pub struct AggregatorBuilder {
	settings: Option<Settings>,
	cache: Option<Arc<dyn ItemCache>>,
	adapters: Vec<Arc<dyn SupplierAdapter>>,
}

/// Everything `start` assembles, plus the default store when one was created
struct Assembled {
	router: axum::Router,
	state: AppState,
	memory_store: Option<MemoryStore>,
}

impl AggregatorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(settings: Settings) -> Self {
		Self::new().with_settings(settings)
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Append a supplier after those declared in settings
	pub fn with_supplier_adapter(mut self, adapter: Arc<dyn SupplierAdapter>) -> Self {
		self.adapters.push(adapter);
		self
	}

	/// Use a custom cache instead of the in-memory store
	///
	/// Expiry sweeps for custom caches are the cache's own responsibility.
	pub fn with_cache(mut self, cache: Arc<dyn ItemCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));
		let structured = settings.logging.structured;

		let initialized = match settings.logging.format {
			LogFormat::Json => tracing_subscriber::fmt()
				.json()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init(),
			LogFormat::Pretty => tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init(),
			LogFormat::Compact => tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init(),
		};
		initialized.map_err(|e| format!("Failed to initialize tracing: {}", e))?;

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);
		Ok(())
	}

	fn assemble(self) -> Result<Assembled, Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;

		let normalizer = Arc::new(SchemaNormalizer::with_synonyms(
			settings.normalizer.extra_synonyms.clone(),
		));
		let mut registry =
			AdapterRegistry::from_suppliers(settings.enabled_suppliers(), normalizer)?;
		for adapter in self.adapters {
			registry.register(adapter)?;
		}

		if registry.is_empty() {
			warn!("No suppliers configured; every lookup will be NOT_FOUND");
		}
		info!("Initialized with {} supplier(s)", registry.len());

		let (cache, memory_store): (Arc<dyn ItemCache>, Option<MemoryStore>) = match self.cache {
			Some(cache) => (cache, None),
			None => {
				let store =
					MemoryStore::with_ttl(Duration::from_secs(settings.cache.default_ttl_secs));
				(Arc::new(store.clone()), Some(store))
			},
		};

		let adapters = registry.adapters().to_vec();
		let sequential = SequentialAggregator::new(adapters.clone(), Arc::clone(&cache))
			.with_supplier_timeout(Duration::from_millis(settings.timeouts.per_supplier_ms));
		let race = RaceAggregator::new(adapters, Duration::from_millis(settings.timeouts.race_ms));

		let state = AppState {
			sequential: Arc::new(sequential),
			race: Arc::new(race),
			cache,
		};
		let router = create_router().with_state(state.clone());

		Ok(Assembled {
			router,
			state,
			memory_store,
		})
	}

	/// Build the router and state without binding a listener
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let assembled = self.assemble()?;
		Ok((assembled.router, assembled.state))
	}

	/// Start the complete server
	///
	/// Loads `.env` and configuration (unless settings were provided),
	/// initializes tracing, starts the cache sweep, then binds and serves
	/// until Ctrl-C.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		Self::init_tracing_from_settings(&settings)?;
		log_service_info();
		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		for supplier in settings.enabled_suppliers() {
			info!(
				"  - {}: {} ({}ms timeout)",
				supplier.supplier_id, supplier.endpoint, supplier.timeout_ms
			);
		}

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;
		let sweep_interval = Duration::from_secs(settings.cache.sweep_interval_secs);

		self.settings = Some(settings);
		let assembled = self.assemble()?;

		let sweep = assembled.memory_store.as_ref().map(|store| {
			info!(
				"Result cache: {}s TTL, swept every {}s",
				store.default_ttl().as_secs(),
				sweep_interval.as_secs()
			);
			store.start_ttl_cleanup(sweep_interval)
		});
		info!(
			"Race lookups give up after {}ms",
			assembled.state.race.race_timeout().as_millis()
		);

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr, assembled.state.sequential.supplier_count());
		info!("API endpoints available:");
		info!("  GET  /food-aggregator");
		info!("  GET  /health");
		info!("  GET  /buy-item/{{name}}");
		info!("  GET  /buy-item-qty/{{name}}&{{quantity}}");
		info!("  GET  /buy-item-qty-price/{{name}}&{{quantity}}&{{price}}");
		info!("  GET  /show-summary");
		info!("  GET  /fast-buy-item/{{name}}");

		axum::serve(listener, assembled.router)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		if let Some(sweep) = sweep {
			sweep.abort();
		}
		log_service_shutdown();
		Ok(())
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Failed to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}
