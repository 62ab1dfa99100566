//! Per-order item ledger.
//!
//! An insertion-ordered sequence of (name, quantity) entries backed by
//! an arena of slots chained into a singly linked list. Deleted slots
//! go onto a free list and are recycled by later appends; enumeration
//! follows the chain, so relative order survives mid-sequence removal.

use ledger_types::ItemEntry;

#[derive(Debug, Clone)]
struct Slot {
	entry: ItemEntry,
	next: Option<usize>,
}

/// Ordered, mutable collection of line items for one order.
///
/// New entries are appended at the tail. `update` and `delete` act on
/// the first entry whose name matches exactly, scanning from the head;
/// duplicate names are allowed and later duplicates are untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemLedger {
	slots: Vec<Option<Slot>>,
	head: Option<usize>,
	tail: Option<usize>,
	free: Vec<usize>,
	len: usize,
}

impl ItemLedger {
	/// Creates an empty ledger.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a new entry at the tail.
	///
	/// Always succeeds; the entry enumerates after all existing ones.
	pub fn add(&mut self, name: impl Into<String>, quantity: u64) {
		let slot = Slot {
			entry: ItemEntry::new(name, quantity),
			next: None,
		};
		let index = match self.free.pop() {
			Some(index) => {
				self.slots[index] = Some(slot);
				index
			},
			None => {
				self.slots.push(Some(slot));
				self.slots.len() - 1
			},
		};

		match self.tail {
			Some(tail) => {
				// The tail slot is always live while the chain is non-empty.
				if let Some(slot) = self.slots[tail].as_mut() {
					slot.next = Some(index);
				}
			},
			None => self.head = Some(index),
		}
		self.tail = Some(index);
		self.len += 1;
	}

	/// Removes the first entry whose name matches.
	///
	/// The relative order of the remaining entries is preserved.
	/// Returns whether a match was found; a miss leaves the ledger
	/// untouched.
	pub fn delete(&mut self, name: &str) -> bool {
		let mut prev: Option<usize> = None;
		let mut cursor = self.head;

		while let Some(index) = cursor {
			let (matches, next) = match self.slots[index].as_ref() {
				Some(slot) => (slot.entry.name == name, slot.next),
				None => (false, None),
			};

			if matches {
				match prev {
					Some(prev_index) => {
						if let Some(slot) = self.slots[prev_index].as_mut() {
							slot.next = next;
						}
					},
					None => self.head = next,
				}
				if self.tail == Some(index) {
					self.tail = prev;
				}
				self.slots[index] = None;
				self.free.push(index);
				self.len -= 1;
				return true;
			}

			prev = Some(index);
			cursor = next;
		}

		false
	}

	/// Replaces the quantity of the first entry whose name matches.
	///
	/// Order and all other entries are unaffected. Returns whether a
	/// match was found.
	pub fn update(&mut self, name: &str, new_quantity: u64) -> bool {
		let mut cursor = self.head;

		while let Some(index) = cursor {
			match self.slots[index].as_mut() {
				Some(slot) if slot.entry.name == name => {
					slot.entry.quantity = new_quantity;
					return true;
				},
				Some(slot) => cursor = slot.next,
				None => return false,
			}
		}

		false
	}

	/// Returns a read-only iterator over entries in insertion order.
	pub fn iter(&self) -> Iter<'_> {
		Iter {
			ledger: self,
			cursor: self.head,
		}
	}

	/// Returns a cloned snapshot of all entries in current order.
	pub fn entries(&self) -> Vec<ItemEntry> {
		self.iter().cloned().collect()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns true when the ledger holds no entries.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl PartialEq for ItemLedger {
	fn eq(&self, other: &Self) -> bool {
		self.len == other.len && self.iter().eq(other.iter())
	}
}

impl Eq for ItemLedger {}

impl From<Vec<ItemEntry>> for ItemLedger {
	fn from(entries: Vec<ItemEntry>) -> Self {
		let mut ledger = Self::new();
		for entry in entries {
			ledger.add(entry.name, entry.quantity);
		}
		ledger
	}
}

impl From<ItemLedger> for Vec<ItemEntry> {
	fn from(ledger: ItemLedger) -> Self {
		ledger.entries()
	}
}

impl<'a> IntoIterator for &'a ItemLedger {
	type Item = &'a ItemEntry;
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over ledger entries in insertion order.
pub struct Iter<'a> {
	ledger: &'a ItemLedger,
	cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = &'a ItemEntry;

	fn next(&mut self) -> Option<Self::Item> {
		let index = self.cursor?;
		let slot = self.ledger.slots[index].as_ref()?;
		self.cursor = slot.next;
		Some(&slot.entry)
	}
}
