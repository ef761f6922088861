//! Item query model and filter semantics

use serde::{Deserialize, Serialize};

use super::{Item, QueryValidationError, QueryValidationResult};

/// A lookup for one item by exact name, optionally filtered by stock and price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
	/// Case-sensitive exact-match key
	pub name: String,
	/// Minimum stock the matching item must carry
	pub quantity: Option<i64>,
	/// Price without currency symbol, compared as an exact string
	pub price: Option<String>,
}

impl ItemQuery {
	/// Query matching on name only
	pub fn by_name(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			quantity: None,
			price: None,
		}
	}

	pub fn with_quantity(mut self, quantity: i64) -> Self {
		self.quantity = Some(quantity);
		self
	}

	pub fn with_price(mut self, price: impl Into<String>) -> Self {
		self.price = Some(price.into());
		self
	}

	/// Reject queries that could never be answered meaningfully
	pub fn validate(&self) -> QueryValidationResult<()> {
		if self.name.is_empty() {
			return Err(QueryValidationError::EmptyName);
		}

		if let Some(quantity) = self.quantity {
			if quantity <= 0 {
				return Err(QueryValidationError::NonPositiveQuantity { quantity });
			}
		}

		if matches!(self.price.as_deref(), Some("")) {
			return Err(QueryValidationError::EmptyPrice);
		}

		Ok(())
	}

	/// Price-qualified queries are the only ones that read and populate the cache
	pub fn is_price_qualified(&self) -> bool {
		self.price.is_some()
	}

	/// Whether `item` satisfies every active filter of this query
	///
	/// Name is compared exactly, quantity as `item.quantity >= requested`, and
	/// price as string equality against the item price minus its first character.
	pub fn is_satisfied_by(&self, item: &Item) -> bool {
		if item.name != self.name {
			return false;
		}

		if let Some(quantity) = self.quantity {
			if i64::from(item.quantity) < quantity {
				return false;
			}
		}

		match &self.price {
			Some(price) => item.price_amount() == Some(price.as_str()),
			None => true,
		}
	}
}
