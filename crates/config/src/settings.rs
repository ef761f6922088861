//! Configuration settings structures

use food_types::{Supplier, SupplierValidationError, CANONICAL_FIELDS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

/// Supplier catalogs the service ships with, in priority order
pub const DEFAULT_SUPPLIER_ENDPOINTS: [&str; 3] = [
	"https://run.mocky.io/v3/c51441de-5c1a-4dc2-a44e-aab4f619926b",
	"https://run.mocky.io/v3/4ec58fbc-e9e5-4ace-9ff0-4e893ef9663c",
	"https://run.mocky.io/v3/e6c77e5c-aec9-403f-821b-e14114220148",
];

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	/// Ordered by priority for sequential lookups
	pub suppliers: Vec<SupplierConfig>,
	pub timeouts: TimeoutSettings,
	pub cache: CacheSettings,
	pub normalizer: NormalizerSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Individual supplier configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SupplierConfig {
	pub supplier_id: String,
	pub endpoint: String,
	#[serde(default = "default_supplier_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	pub name: Option<String>,
	/// Static request headers, e.g. API keys
	pub headers: Option<HashMap<String, String>>,
}

impl From<SupplierConfig> for Supplier {
	fn from(config: SupplierConfig) -> Self {
		let mut supplier = Supplier::new(config.supplier_id, config.endpoint, config.timeout_ms);
		if let Some(name) = config.name {
			supplier = supplier.with_name(name);
		}
		supplier.headers = config.headers;
		supplier
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Upper bound on each supplier fetch in sequential mode
	pub per_supplier_ms: u64,
	/// How long a race waits for any supplier to report a match
	pub race_ms: u64,
}

/// Result cache configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CacheSettings {
	pub default_ttl_secs: u64,
	pub sweep_interval_secs: u64,
}

/// Extra field-name synonyms, applied after the built-in ones
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct NormalizerSettings {
	/// alias -> canonical field, applied in alias order
	pub extra_synonyms: BTreeMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
	#[error("Supplier '{supplier_id}' is invalid: {source}")]
	InvalidSupplier {
		supplier_id: String,
		#[source]
		source: SupplierValidationError,
	},

	#[error("Supplier '{supplier_id}' is configured more than once")]
	DuplicateSupplier { supplier_id: String },

	#[error("{field} must be greater than 0")]
	ZeroDuration { field: &'static str },

	#[error("Synonym '{alias}' must map a non-canonical name onto one of id, name, quantity, price (got '{canonical}')")]
	InvalidSynonym { alias: String, canonical: String },
}

fn default_supplier_timeout_ms() -> u64 {
	3000
}

fn default_enabled() -> bool {
	true
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 4000,
		}
	}
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			per_supplier_ms: 3000,
			race_ms: 5000,
		}
	}
}

impl Default for CacheSettings {
	fn default() -> Self {
		Self {
			default_ttl_secs: 300,
			sweep_interval_secs: 600,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		let suppliers = DEFAULT_SUPPLIER_ENDPOINTS
			.iter()
			.enumerate()
			.map(|(index, endpoint)| SupplierConfig {
				supplier_id: format!("supplier-{}", index + 1),
				endpoint: endpoint.to_string(),
				timeout_ms: default_supplier_timeout_ms(),
				enabled: true,
				name: None,
				headers: None,
			})
			.collect();

		Self {
			server: ServerSettings::default(),
			suppliers,
			timeouts: TimeoutSettings::default(),
			cache: CacheSettings::default(),
			normalizer: NormalizerSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Enabled suppliers in configured order
	pub fn enabled_suppliers(&self) -> Vec<Supplier> {
		self.suppliers
			.iter()
			.filter(|config| config.enabled)
			.cloned()
			.map(Supplier::from)
			.collect()
	}

	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		let mut seen = HashSet::new();
		for config in &self.suppliers {
			Supplier::from(config.clone())
				.validate()
				.map_err(|source| ConfigValidationError::InvalidSupplier {
					supplier_id: config.supplier_id.clone(),
					source,
				})?;

			if !seen.insert(config.supplier_id.as_str()) {
				return Err(ConfigValidationError::DuplicateSupplier {
					supplier_id: config.supplier_id.clone(),
				});
			}
		}

		for (field, value) in [
			("timeouts.per_supplier_ms", self.timeouts.per_supplier_ms),
			("timeouts.race_ms", self.timeouts.race_ms),
			("cache.default_ttl_secs", self.cache.default_ttl_secs),
			("cache.sweep_interval_secs", self.cache.sweep_interval_secs),
		] {
			if value == 0 {
				return Err(ConfigValidationError::ZeroDuration { field });
			}
		}

		for (alias, canonical) in &self.normalizer.extra_synonyms {
			if CANONICAL_FIELDS.contains(&alias.as_str())
				|| !CANONICAL_FIELDS.contains(&canonical.as_str())
			{
				return Err(ConfigValidationError::InvalidSynonym {
					alias: alias.clone(),
					canonical: canonical.clone(),
				});
			}
		}

		Ok(())
	}
}
