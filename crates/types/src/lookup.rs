//! Terminal outcomes of an item lookup

use crate::Item;

/// What a lookup produced once every relevant supplier was consulted
///
/// `NotFound` and `TimedOut` are legitimate results rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
	Found(Item),
	NotFound,
	/// Race mode only: no supplier reported within the bounded wait
	TimedOut,
}

impl LookupOutcome {
	pub fn item(&self) -> Option<&Item> {
		match self {
			LookupOutcome::Found(item) => Some(item),
			_ => None,
		}
	}

	pub fn into_item(self) -> Option<Item> {
		match self {
			LookupOutcome::Found(item) => Some(item),
			_ => None,
		}
	}

	pub fn is_found(&self) -> bool {
		matches!(self, LookupOutcome::Found(_))
	}
}
