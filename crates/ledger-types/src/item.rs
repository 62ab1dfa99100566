//! Item entry types for per-order ledgers.

use serde::{Deserialize, Serialize};

/// A single line item inside one order's ledger.
///
/// The name is the lookup key for by-name mutations. Names are not
/// enforced unique within a ledger; duplicates may co-exist, and
/// update/delete act on the first match scanning from the head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
	/// Item name, matched exactly and case-sensitively.
	pub name: String,
	/// Quantity on order. Updates overwrite it wholesale.
	pub quantity: u64,
}

impl ItemEntry {
	/// Creates a new item entry.
	pub fn new(name: impl Into<String>, quantity: u64) -> Self {
		Self {
			name: name.into(),
			quantity,
		}
	}
}
