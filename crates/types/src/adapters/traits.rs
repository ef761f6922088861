//! Core adapter trait for supplier implementations

use async_trait::async_trait;
use std::fmt::Debug;

use super::AdapterResult;
use crate::{Supplier, SupplierCatalog};

/// One upstream supplier, able to produce its normalized catalog
///
/// Implementations perform a single fetch per call and never retry.
#[async_trait]
pub trait SupplierAdapter: Send + Sync + Debug {
	/// Supplier this adapter talks to
	fn supplier_info(&self) -> &Supplier;

	fn supplier_id(&self) -> &str {
		&self.supplier_info().supplier_id
	}

	/// Fetch, normalize and decode the supplier's full catalog
	async fn fetch_catalog(&self) -> AdapterResult<SupplierCatalog>;
}
