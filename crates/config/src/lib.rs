//! Food Aggregator Configuration
//!
//! Settings model, file and environment loading, and startup logging.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	CacheSettings, ConfigValidationError, LogFormat, LoggingSettings, NormalizerSettings,
	ServerSettings, Settings, SupplierConfig, TimeoutSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
