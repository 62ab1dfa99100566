//! The order store composing the sequence with per-order ledgers.

use crate::{ItemLedger, OrderSequence, StoreError};
use ledger_types::{ItemEntry, OrderId, OrderRecord, StoreSnapshot, DEFAULT_LABEL_PREFIX};
use std::collections::HashMap;

/// FIFO store of orders, each owning an ordered item ledger.
///
/// Pairs one [`OrderSequence`] with a mapping from identifier to
/// [`ItemLedger`]. Every identifier in the sequence has exactly one
/// ledger and vice versa after any public operation completes; the
/// sequence is only appended to or cleared wholesale.
///
/// The store holds no cursor: navigation queries answer relative to a
/// caller-supplied identifier, so several navigation sessions can share
/// one store.
#[derive(Debug, Clone)]
pub struct OrderStore {
	sequence: OrderSequence,
	ledgers: HashMap<OrderId, ItemLedger>,
	label_prefix: String,
}

impl OrderStore {
	/// Creates an empty store with the default label prefix.
	pub fn new() -> Self {
		Self::with_label_prefix(DEFAULT_LABEL_PREFIX)
	}

	/// Creates an empty store generating labels with the given prefix.
	pub fn with_label_prefix(prefix: impl Into<String>) -> Self {
		Self {
			sequence: OrderSequence::new(),
			ledgers: HashMap::new(),
			label_prefix: prefix.into(),
		}
	}

	/// Clears all orders, then creates `count` fresh ones.
	///
	/// Each new order gets a generated label incorporating its 1-based
	/// position and an empty ledger. Fails with
	/// [`StoreError::InvalidCount`] when `count` is zero, leaving the
	/// existing orders in place.
	pub fn initialize_orders(&mut self, count: usize) -> Result<(), StoreError> {
		if count == 0 {
			return Err(StoreError::InvalidCount);
		}

		self.sequence.clear();
		self.ledgers.clear();
		for index in 1..=count {
			let id = OrderId::from_index(&self.label_prefix, index);
			self.sequence.append(id.clone());
			self.ledgers.insert(id, ItemLedger::new());
		}
		Ok(())
	}

	/// Returns the ledger bound to an identifier.
	pub fn ledger(&self, id: &OrderId) -> Result<&ItemLedger, StoreError> {
		self.ledgers
			.get(id)
			.ok_or_else(|| StoreError::OrderNotFound(id.clone()))
	}

	/// Returns the ledger bound to an identifier for mutation.
	pub fn ledger_mut(&mut self, id: &OrderId) -> Result<&mut ItemLedger, StoreError> {
		self.ledgers
			.get_mut(id)
			.ok_or_else(|| StoreError::OrderNotFound(id.clone()))
	}

	/// Appends an item to an order's ledger.
	pub fn add_item(
		&mut self,
		id: &OrderId,
		name: impl Into<String>,
		quantity: u64,
	) -> Result<(), StoreError> {
		self.ledger_mut(id)?.add(name, quantity);
		Ok(())
	}

	/// Replaces the quantity of the first matching item in an order's
	/// ledger. Returns whether a match was found.
	pub fn update_item(
		&mut self,
		id: &OrderId,
		name: &str,
		quantity: u64,
	) -> Result<bool, StoreError> {
		Ok(self.ledger_mut(id)?.update(name, quantity))
	}

	/// Removes the first matching item from an order's ledger. Returns
	/// whether a match was found.
	pub fn delete_item(&mut self, id: &OrderId, name: &str) -> Result<bool, StoreError> {
		Ok(self.ledger_mut(id)?.delete(name))
	}

	/// Returns a snapshot of an order's items in ledger order.
	pub fn list_items(&self, id: &OrderId) -> Result<Vec<ItemEntry>, StoreError> {
		Ok(self.ledger(id)?.entries())
	}

	/// Returns the identifier at sequence position 0.
	pub fn first(&self) -> Result<&OrderId, StoreError> {
		self.sequence.at(0).ok_or(StoreError::EmptyStore)
	}

	/// Returns the identifier following `current` in the sequence.
	///
	/// Fails with [`StoreError::AtTail`] when `current` is at the last
	/// position or not in the sequence.
	pub fn next(&self, current: &OrderId) -> Result<&OrderId, StoreError> {
		let position = self
			.sequence
			.position_of(current)
			.ok_or(StoreError::AtTail)?;
		self.sequence.at(position + 1).ok_or(StoreError::AtTail)
	}

	/// Returns the identifier preceding `current` in the sequence.
	///
	/// Fails with [`StoreError::AtHead`] when `current` is at position
	/// 0 or not in the sequence.
	pub fn previous(&self, current: &OrderId) -> Result<&OrderId, StoreError> {
		let position = self
			.sequence
			.position_of(current)
			.ok_or(StoreError::AtHead)?;
		if position == 0 {
			return Err(StoreError::AtHead);
		}
		self.sequence.at(position - 1).ok_or(StoreError::AtHead)
	}

	/// Returns true when the identifier sits at sequence position 0.
	pub fn is_at_head(&self, id: &OrderId) -> bool {
		self.sequence.position_of(id) == Some(0)
	}

	/// Returns true when the identifier sits at the last position.
	pub fn is_at_tail(&self, id: &OrderId) -> bool {
		match self.sequence.position_of(id) {
			Some(position) => position + 1 == self.sequence.len(),
			None => false,
		}
	}

	/// Iterates all orders with their ledgers in sequence order.
	pub fn all_orders(&self) -> impl Iterator<Item = (&OrderId, &ItemLedger)> {
		self.sequence
			.iter()
			.filter_map(|id| self.ledgers.get(id).map(|ledger| (id, ledger)))
	}

	/// Returns the number of orders in the store.
	pub fn len(&self) -> usize {
		self.sequence.len()
	}

	/// Returns true when the store holds no orders.
	pub fn is_empty(&self) -> bool {
		self.sequence.is_empty()
	}

	/// Returns the FIFO sequence of identifiers.
	pub fn sequence(&self) -> &OrderSequence {
		&self.sequence
	}

	/// Captures the full store state in sequence order.
	pub fn snapshot(&self) -> StoreSnapshot {
		StoreSnapshot {
			orders: self
				.all_orders()
				.map(|(id, ledger)| OrderRecord {
					id: id.clone(),
					items: ledger.entries(),
				})
				.collect(),
		}
	}

	/// Restores a store from a snapshot with the default label prefix.
	pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
		Self::from_snapshot_with_prefix(snapshot, DEFAULT_LABEL_PREFIX)
	}

	/// Restores a store from a snapshot.
	///
	/// Records are replayed in order. A later record re-using an
	/// already-seen identifier is dropped with a warning; a snapshot
	/// written by [`OrderStore::snapshot`] never contains one.
	pub fn from_snapshot_with_prefix(snapshot: StoreSnapshot, prefix: impl Into<String>) -> Self {
		let mut store = Self::with_label_prefix(prefix);
		for record in snapshot.orders {
			if store.ledgers.contains_key(&record.id) {
				tracing::warn!(id = %record.id, "dropping duplicate order in snapshot");
				continue;
			}
			store.sequence.append(record.id.clone());
			store.ledgers.insert(record.id, ItemLedger::from(record.items));
		}
		store
	}
}

impl Default for OrderStore {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_sequence_matches_mapping(store: &OrderStore) {
		assert_eq!(store.sequence().len(), store.ledgers.len());
		for id in store.sequence().iter() {
			assert!(store.ledgers.contains_key(id));
		}
	}

	#[test]
	fn initialize_creates_labelled_orders_with_empty_ledgers() {
		let mut store = OrderStore::new();
		store.initialize_orders(3).unwrap();

		assert_eq!(store.len(), 3);
		for (index, id) in store.sequence().iter().enumerate() {
			assert_eq!(id.as_str(), format!("order-{}", index + 1));
			assert!(store.ledger(id).unwrap().is_empty());
		}
		assert_sequence_matches_mapping(&store);
	}

	#[test]
	fn initialize_rejects_zero_and_keeps_existing_orders() {
		let mut store = OrderStore::new();
		store.initialize_orders(2).unwrap();

		assert_eq!(store.initialize_orders(0), Err(StoreError::InvalidCount));
		assert_eq!(store.len(), 2);
	}

	#[test]
	fn reinitialize_discards_previous_orders_and_ledgers() {
		let mut store = OrderStore::new();
		store.initialize_orders(2).unwrap();
		let first = store.first().unwrap().clone();
		store.add_item(&first, "apples", 3).unwrap();

		store.initialize_orders(4).unwrap();
		assert_eq!(store.len(), 4);
		assert!(store.ledger(&first).unwrap().is_empty());
		assert_sequence_matches_mapping(&store);
	}

	#[test]
	fn item_operations_fail_for_unknown_order() {
		let mut store = OrderStore::new();
		store.initialize_orders(1).unwrap();
		let unknown = OrderId::from("order-99");

		assert_eq!(
			store.add_item(&unknown, "apples", 3),
			Err(StoreError::OrderNotFound(unknown.clone()))
		);
		assert_eq!(
			store.update_item(&unknown, "apples", 3),
			Err(StoreError::OrderNotFound(unknown.clone()))
		);
		assert_eq!(
			store.delete_item(&unknown, "apples"),
			Err(StoreError::OrderNotFound(unknown.clone()))
		);
		assert_eq!(
			store.list_items(&unknown),
			Err(StoreError::OrderNotFound(unknown))
		);
	}

	#[test]
	fn item_operations_reach_the_right_ledger() {
		let mut store = OrderStore::new();
		store.initialize_orders(2).unwrap();
		let first = store.first().unwrap().clone();
		let second = store.next(&first).unwrap().clone();

		store.add_item(&first, "apples", 3).unwrap();
		store.add_item(&second, "bread", 1).unwrap();

		assert!(store.update_item(&first, "apples", 7).unwrap());
		assert!(!store.update_item(&second, "apples", 7).unwrap());
		assert!(store.delete_item(&second, "bread").unwrap());

		assert_eq!(
			store.list_items(&first).unwrap(),
			vec![ItemEntry::new("apples", 7)]
		);
		assert!(store.list_items(&second).unwrap().is_empty());
	}

	#[test]
	fn first_on_empty_store_reports_empty() {
		let store = OrderStore::new();
		assert_eq!(store.first(), Err(StoreError::EmptyStore));
	}

	#[test]
	fn navigation_round_trips() {
		let mut store = OrderStore::new();
		store.initialize_orders(5).unwrap();

		let first = store.first().unwrap().clone();
		let second = store.next(&first).unwrap().clone();
		let third = store.next(&second).unwrap().clone();
		let fourth = store.next(&third).unwrap().clone();

		// Stepping back from the third hop lands on the second hop's id.
		assert_eq!(store.previous(&fourth).unwrap(), &third);
	}

	#[test]
	fn next_at_tail_reports_boundary_without_mutating() {
		let mut store = OrderStore::new();
		store.initialize_orders(2).unwrap();
		let before = store.snapshot();

		let first = store.first().unwrap().clone();
		let last = store.next(&first).unwrap().clone();
		assert_eq!(store.next(&last), Err(StoreError::AtTail));
		assert_eq!(store.snapshot(), before);
	}

	#[test]
	fn previous_at_head_reports_boundary() {
		let mut store = OrderStore::new();
		store.initialize_orders(2).unwrap();

		let first = store.first().unwrap().clone();
		assert_eq!(store.previous(&first), Err(StoreError::AtHead));
	}

	#[test]
	fn navigation_with_unknown_id_reports_boundary() {
		let mut store = OrderStore::new();
		store.initialize_orders(2).unwrap();
		let unknown = OrderId::from("order-99");

		assert_eq!(store.next(&unknown), Err(StoreError::AtTail));
		assert_eq!(store.previous(&unknown), Err(StoreError::AtHead));
		assert!(!store.is_at_head(&unknown));
		assert!(!store.is_at_tail(&unknown));
	}

	#[test]
	fn head_and_tail_checks_follow_sequence_positions() {
		let mut store = OrderStore::new();
		store.initialize_orders(3).unwrap();

		let first = store.first().unwrap().clone();
		let second = store.next(&first).unwrap().clone();
		let third = store.next(&second).unwrap().clone();

		assert!(store.is_at_head(&first));
		assert!(!store.is_at_tail(&first));
		assert!(!store.is_at_head(&second));
		assert!(!store.is_at_tail(&second));
		assert!(store.is_at_tail(&third));
	}

	#[test]
	fn single_order_is_both_head_and_tail() {
		let mut store = OrderStore::new();
		store.initialize_orders(1).unwrap();

		let only = store.first().unwrap().clone();
		assert!(store.is_at_head(&only));
		assert!(store.is_at_tail(&only));
	}

	#[test]
	fn all_orders_enumerates_in_sequence_order() {
		let mut store = OrderStore::new();
		store.initialize_orders(3).unwrap();
		let second = OrderId::from("order-2");
		store.add_item(&second, "bread", 1).unwrap();

		let ids: Vec<&OrderId> = store.all_orders().map(|(id, _)| id).collect();
		assert_eq!(
			ids,
			vec![
				&OrderId::from("order-1"),
				&OrderId::from("order-2"),
				&OrderId::from("order-3")
			]
		);

		let lens: Vec<usize> = store.all_orders().map(|(_, ledger)| ledger.len()).collect();
		assert_eq!(lens, vec![0, 1, 0]);
	}

	#[test]
	fn snapshot_round_trips_exactly() {
		let mut store = OrderStore::new();
		store.initialize_orders(3).unwrap();
		store
			.add_item(&OrderId::from("order-1"), "apples", 3)
			.unwrap();
		store
			.add_item(&OrderId::from("order-1"), "apples", 5)
			.unwrap();
		store
			.add_item(&OrderId::from("order-2"), "bread", 1)
			.unwrap();

		let restored = OrderStore::from_snapshot(store.snapshot());
		assert_eq!(restored.sequence(), store.sequence());
		for id in store.sequence().iter() {
			assert_eq!(restored.list_items(id).unwrap(), store.list_items(id).unwrap());
		}
		assert_sequence_matches_mapping(&restored);
	}

	#[test]
	fn duplicate_snapshot_records_are_dropped() {
		let snapshot = StoreSnapshot {
			orders: vec![
				OrderRecord {
					id: OrderId::from("order-1"),
					items: vec![ItemEntry::new("apples", 3)],
				},
				OrderRecord {
					id: OrderId::from("order-1"),
					items: vec![ItemEntry::new("bread", 1)],
				},
			],
		};

		let store = OrderStore::from_snapshot(snapshot);
		assert_eq!(store.len(), 1);
		assert_eq!(
			store.list_items(&OrderId::from("order-1")).unwrap(),
			vec![ItemEntry::new("apples", 3)]
		);
		assert_sequence_matches_mapping(&store);
	}

	#[test]
	fn configured_prefix_shapes_generated_labels() {
		let mut store = OrderStore::with_label_prefix("ticket");
		store.initialize_orders(2).unwrap();

		assert_eq!(store.first().unwrap().as_str(), "ticket-1");
	}
}
