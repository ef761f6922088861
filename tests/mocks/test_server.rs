//! Aggregator server for integration tests

use food_aggregator::{AggregatorBuilder, Settings};
use food_config::SupplierConfig;
use tokio::task::JoinHandle;

/// Aggregator served on an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
	pub client: reqwest::Client,
}

impl TestServer {
	/// Aggregator over the given supplier endpoints, in priority order
	pub async fn spawn(endpoints: &[&str]) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_settings(settings_for(endpoints)).await
	}

	pub async fn spawn_with_settings(
		settings: Settings,
	) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_builder(AggregatorBuilder::from_config(settings)).await
	}

	pub async fn spawn_with_builder(
		builder: AggregatorBuilder,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = builder.start().await?;

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self {
			base_url: format!("http://{}", addr),
			handle,
			client: reqwest::Client::new(),
		})
	}

	pub async fn get(&self, path: &str) -> reqwest::Response {
		self.client
			.get(format!("{}{}", self.base_url, path))
			.send()
			.await
			.expect("request to aggregator")
	}

	/// GET `path` and decode the body as JSON
	pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
		let response = self.get(path).await;
		let status = response.status();
		let body = response.json().await.expect("json body");
		(status, body)
	}
}

impl Drop for TestServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

/// Settings whose only suppliers are `endpoints`
pub fn settings_for(endpoints: &[&str]) -> Settings {
	let mut settings = Settings::default();
	settings.server.host = "127.0.0.1".to_string();
	settings.suppliers = endpoints
		.iter()
		.enumerate()
		.map(|(index, endpoint)| SupplierConfig {
			supplier_id: format!("supplier-{}", index + 1),
			endpoint: endpoint.to_string(),
			timeout_ms: 3000,
			enabled: true,
			name: None,
			headers: None,
		})
		.collect();
	settings
}
