//! Order identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default prefix for generated order labels.
pub const DEFAULT_LABEL_PREFIX: &str = "order";

/// Opaque, human-readable identifier for one order.
///
/// Identifiers are generated when orders are initialized and never
/// mutated afterwards. They are unique within one store instance for
/// the lifetime of that instance; nothing else may be read into them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
	/// Builds the label for the order at a 1-based sequence position.
	///
	/// The label is stable and reproducible: the same prefix and index
	/// always produce the same identifier.
	pub fn from_index(prefix: &str, index: usize) -> Self {
		Self(format!("{}-{}", prefix, index))
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for OrderId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for OrderId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for OrderId {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_are_reproducible() {
		assert_eq!(
			OrderId::from_index(DEFAULT_LABEL_PREFIX, 1),
			OrderId::from("order-1")
		);
		assert_eq!(
			OrderId::from_index(DEFAULT_LABEL_PREFIX, 12),
			OrderId::from_index(DEFAULT_LABEL_PREFIX, 12)
		);
	}

	#[test]
	fn custom_prefix_is_carried() {
		let id = OrderId::from_index("ticket", 3);
		assert_eq!(id.as_str(), "ticket-3");
		assert_eq!(id.to_string(), "ticket-3");
	}
}
