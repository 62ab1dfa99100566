//! FIFO sequence of order identifiers.

use ledger_types::OrderId;

/// Insertion-ordered sequence of order identifiers.
///
/// Represents FIFO processing order. The sequence is only appended to
/// or cleared wholesale; it is never reordered and no single entry is
/// removed. It carries no business rules beyond preserving append
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSequence {
	ids: Vec<OrderId>,
}

impl OrderSequence {
	/// Creates an empty sequence.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an identifier after all existing ones.
	pub fn append(&mut self, id: OrderId) {
		self.ids.push(id);
	}

	/// Removes every identifier.
	pub fn clear(&mut self) {
		self.ids.clear();
	}

	/// Returns the position of an identifier, if present.
	pub fn position_of(&self, id: &OrderId) -> Option<usize> {
		self.ids.iter().position(|candidate| candidate == id)
	}

	/// Returns the identifier at a position, if within bounds.
	pub fn at(&self, index: usize) -> Option<&OrderId> {
		self.ids.get(index)
	}

	/// Returns the number of identifiers in the sequence.
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	/// Returns true when the sequence holds no identifiers.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Iterates identifiers in sequence order.
	pub fn iter(&self) -> impl Iterator<Item = &OrderId> {
		self.ids.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn append_preserves_order() {
		let mut sequence = OrderSequence::new();
		sequence.append(OrderId::from("order-1"));
		sequence.append(OrderId::from("order-2"));

		assert_eq!(sequence.len(), 2);
		assert_eq!(sequence.at(0), Some(&OrderId::from("order-1")));
		assert_eq!(sequence.at(1), Some(&OrderId::from("order-2")));
		assert_eq!(sequence.at(2), None);
	}

	#[test]
	fn position_of_finds_present_ids_only() {
		let mut sequence = OrderSequence::new();
		sequence.append(OrderId::from("order-1"));

		assert_eq!(sequence.position_of(&OrderId::from("order-1")), Some(0));
		assert_eq!(sequence.position_of(&OrderId::from("order-9")), None);
	}

	#[test]
	fn clear_empties_the_sequence() {
		let mut sequence = OrderSequence::new();
		sequence.append(OrderId::from("order-1"));
		sequence.clear();

		assert!(sequence.is_empty());
		assert_eq!(sequence.at(0), None);
	}
}
