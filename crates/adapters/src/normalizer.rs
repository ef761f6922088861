//! Supplier payload normalization
//!
//! Suppliers name their fields differently. The body is parsed as JSON and
//! known synonym keys of each catalog entry are renamed to the canonical
//! names before decoding. Values are never touched. Unknown keys pass through
//! and simply leave the canonical field at its default.

use food_types::{AdapterError, AdapterResult, Item};
use serde_json::{Map, Value};
use tracing::warn;

pub use food_types::CANONICAL_FIELDS;

/// Synonyms recognized out of the box, as `(alias, canonical)`
pub const DEFAULT_SYNONYMS: [(&str, &str); 4] = [
	("itemId", "id"),
	("itemName", "name"),
	("productId", "id"),
	("productName", "name"),
];

/// Renames synonym keys in supplier payloads to canonical field names
#[derive(Debug, Clone)]
pub struct SchemaNormalizer {
	/// `(alias, canonical)` pairs, applied in order
	synonyms: Vec<(String, String)>,
}

impl SchemaNormalizer {
	/// Normalizer recognizing the built-in synonyms
	pub fn new() -> Self {
		Self::with_synonyms(std::iter::empty::<(String, String)>())
	}

	/// Normalizer recognizing the built-in synonyms followed by `extra`
	pub fn with_synonyms<I, A, C>(extra: I) -> Self
	where
		I: IntoIterator<Item = (A, C)>,
		A: AsRef<str>,
		C: AsRef<str>,
	{
		let builtin = DEFAULT_SYNONYMS
			.iter()
			.map(|(alias, canonical)| (alias.to_string(), canonical.to_string()));
		let extra = extra
			.into_iter()
			.map(|(alias, canonical)| (alias.as_ref().to_string(), canonical.as_ref().to_string()));

		let synonyms = builtin
			.chain(extra)
			.filter(|(alias, canonical)| !alias.is_empty() && alias != canonical)
			.collect();

		Self { synonyms }
	}

	/// Rename recognized synonym keys of every object in a catalog
	///
	/// A key that is already canonical wins over any synonym for it, and
	/// among several synonyms for one field the earliest registered wins.
	/// Losing keys are dropped. Payloads already in canonical form come back
	/// unchanged.
	pub fn normalize(&self, payload: Value) -> Value {
		match payload {
			Value::Array(entries) => {
				Value::Array(entries.into_iter().map(|entry| self.normalize(entry)).collect())
			},
			Value::Object(fields) => Value::Object(self.rename_keys(fields)),
			other => other,
		}
	}

	fn rename_keys(&self, mut fields: Map<String, Value>) -> Map<String, Value> {
		for (alias, canonical) in &self.synonyms {
			if let Some(value) = fields.remove(alias) {
				fields.entry(canonical.as_str()).or_insert(value);
			}
		}
		fields
	}

	/// Parse, normalize and decode a supplier body into canonical items
	///
	/// The body must be a JSON array. A single entry that still cannot be
	/// decoded (e.g. a negative quantity) is skipped with a warning rather
	/// than failing the whole catalog.
	pub fn decode(&self, supplier_id: &str, body: &str) -> AdapterResult<Vec<Item>> {
		let malformed = |reason: String| AdapterError::SupplierMalformedResponse {
			supplier_id: supplier_id.to_string(),
			reason,
		};

		let payload: Value = serde_json::from_str(body).map_err(|e| malformed(e.to_string()))?;
		let Value::Array(entries) = self.normalize(payload) else {
			return Err(malformed("expected a JSON array".to_string()));
		};

		let items = entries
			.into_iter()
			.enumerate()
			.filter_map(|(index, entry)| match serde_json::from_value::<Item>(entry) {
				Ok(item) => Some(item),
				Err(e) => {
					warn!(
						"Skipping undecodable entry {} from supplier {}: {}",
						index, supplier_id, e
					);
					None
				},
			})
			.collect();

		Ok(items)
	}
}

impl Default for SchemaNormalizer {
	fn default() -> Self {
		Self::new()
	}
}
