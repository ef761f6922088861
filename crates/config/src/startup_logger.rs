//! Service startup and shutdown banners

use std::env;
use tracing::info;

/// Logs service information at startup
pub fn log_service_info() {
	let service_name = "food-aggregator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Food Aggregator Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs supplier wiring once the aggregator is built
pub fn log_startup_complete(bind_address: &str, supplier_count: usize) {
	info!("✅ Food Aggregator Service Started Successfully");
	info!("🛒 Suppliers configured: {}", supplier_count);
	info!("🌐 Server listening on: {}", bind_address);
}

pub fn log_service_shutdown() {
	info!("🛑 Food Aggregator Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}
