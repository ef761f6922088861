//! Canonical item model

pub mod errors;
pub mod query;

pub use errors::{QueryValidationError, QueryValidationResult};
pub use query::ItemQuery;

use serde::{Deserialize, Deserializer, Serialize};

/// Field names of the canonical item shape
pub const CANONICAL_FIELDS: [&str; 4] = ["id", "name", "quantity", "price"];

/// Canonical item shape every supplier payload is normalized into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
	/// Supplier-assigned identifier, not unique across suppliers
	#[serde(default, deserialize_with = "deserialize_id")]
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub quantity: u32,
	/// Currency symbol followed by a decimal amount, e.g. `$12.50`
	#[serde(default)]
	pub price: String,
}

impl Item {
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		quantity: u32,
		price: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			quantity,
			price: price.into(),
		}
	}

	/// Price with its leading currency symbol removed
	///
	/// The first character is dropped without checking that it is a currency
	/// symbol. Returns `None` for an empty price.
	pub fn price_amount(&self) -> Option<&str> {
		let mut chars = self.price.chars();
		chars.next()?;
		Some(chars.as_str())
	}
}

/// Suppliers disagree on whether ids are strings or numbers
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum RawId {
		Text(String),
		Number(serde_json::Number),
	}

	Ok(match Option::<RawId>::deserialize(deserializer)? {
		Some(RawId::Text(id)) => id,
		Some(RawId::Number(id)) => id.to_string(),
		None => String::new(),
	})
}
