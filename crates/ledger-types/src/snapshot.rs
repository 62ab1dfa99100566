//! Persisted snapshot shape for the order store.

use crate::{ItemEntry, OrderId};
use serde::{Deserialize, Serialize};

/// One order as it appears in the persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
	/// The order's identifier, kept as an opaque string.
	pub id: OrderId,
	/// Ledger entries in ledger order.
	pub items: Vec<ItemEntry>,
}

/// Full store state as persisted and restored.
///
/// Records appear in FIFO sequence order, so the artifact encodes both
/// the sequence and the per-order ledgers positionally: a well-formed
/// artifact cannot disagree with itself about which orders exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
	/// All orders in sequence order.
	pub orders: Vec<OrderRecord>,
}

impl StoreSnapshot {
	/// Returns true when no orders are recorded.
	pub fn is_empty(&self) -> bool {
		self.orders.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_through_json_exactly() {
		let snapshot = StoreSnapshot {
			orders: vec![
				OrderRecord {
					id: OrderId::from("order-1"),
					items: vec![ItemEntry::new("apples", 3), ItemEntry::new("apples", 5)],
				},
				OrderRecord {
					id: OrderId::from("order-2"),
					items: vec![],
				},
			],
		};

		let bytes = serde_json::to_vec(&snapshot).unwrap();
		let restored: StoreSnapshot = serde_json::from_slice(&bytes).unwrap();
		assert_eq!(restored, snapshot);
	}

	#[test]
	fn default_is_empty() {
		assert!(StoreSnapshot::default().is_empty());
	}
}
