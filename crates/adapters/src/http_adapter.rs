//! HTTP supplier adapter
//!
//! Fetches a supplier's full catalog with a single GET, normalizes the body
//! and decodes it into canonical items. No retries are attempted.

use async_trait::async_trait;
use food_types::{
	AdapterError, AdapterResult, Supplier, SupplierAdapter, SupplierCatalog,
};
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client,
};
use std::{str::FromStr, sync::Arc, time::Duration};
use tracing::{debug, warn};

use crate::normalizer::SchemaNormalizer;

/// Adapter for a supplier serving its catalog as JSON over HTTP
#[derive(Debug)]
pub struct HttpSupplierAdapter {
	supplier: Supplier,
	client: Client,
	normalizer: Arc<SchemaNormalizer>,
}

impl HttpSupplierAdapter {
	/// Create an adapter with a client bound to the supplier's timeout and headers
	pub fn new(supplier: Supplier, normalizer: Arc<SchemaNormalizer>) -> AdapterResult<Self> {
		supplier.validate()?;
		let client = Self::build_client(&supplier)?;

		Ok(Self {
			supplier,
			client,
			normalizer,
		})
	}

	fn build_client(supplier: &Supplier) -> AdapterResult<Client> {
		let mut headers = HeaderMap::new();
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("Food-Aggregator/1.0"));

		if let Some(supplier_headers) = &supplier.headers {
			for (key, value) in supplier_headers {
				match (HeaderName::from_str(key), HeaderValue::from_str(value)) {
					(Ok(header_name), Ok(header_value)) => {
						headers.insert(header_name, header_value);
					},
					_ => warn!(
						"Skipping invalid header '{}' for supplier {}",
						key, supplier.supplier_id
					),
				}
			}
		}

		Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_millis(supplier.timeout_ms))
			.build()
			.map_err(|e| AdapterError::InitializationFailed {
				supplier_id: supplier.supplier_id.clone(),
				reason: e.to_string(),
			})
	}

	fn transport_error(&self, error: reqwest::Error) -> AdapterError {
		if error.is_timeout() {
			AdapterError::Timeout {
				supplier_id: self.supplier.supplier_id.clone(),
				timeout_ms: self.supplier.timeout_ms,
			}
		} else {
			AdapterError::SupplierUnavailable {
				supplier_id: self.supplier.supplier_id.clone(),
				reason: error.to_string(),
			}
		}
	}
}

#[async_trait]
impl SupplierAdapter for HttpSupplierAdapter {
	fn supplier_info(&self) -> &Supplier {
		&self.supplier
	}

	async fn fetch_catalog(&self) -> AdapterResult<SupplierCatalog> {
		debug!(
			"Fetching catalog from supplier {} ({}) at {}",
			self.supplier.display_name(),
			self.supplier.supplier_id,
			self.supplier.endpoint
		);

		let response = self
			.client
			.get(&self.supplier.endpoint)
			.send()
			.await
			.map_err(|e| self.transport_error(e))?;

		let status = response.status();
		if !status.is_success() {
			return Err(AdapterError::HttpStatusError {
				supplier_id: self.supplier.supplier_id.clone(),
				status_code: status.as_u16(),
			});
		}

		let body = response.text().await.map_err(|e| self.transport_error(e))?;
		let items = self.normalizer.decode(&self.supplier.supplier_id, &body)?;

		debug!(
			"Supplier {} returned {} items ({} bytes)",
			self.supplier.supplier_id,
			items.len(),
			body.len()
		);

		Ok(SupplierCatalog::new(self.supplier.supplier_id.clone(), items))
	}
}
