//! In-memory core of the order ledger store.
//!
//! This crate holds the data structures of the system: the per-order
//! item ledger, the FIFO order sequence, and the store that binds them
//! together. Everything here is synchronous and assumes a single
//! logical owner; persistence lives in `ledger-storage`.

/// Per-order item ledger.
pub mod ledger;
/// FIFO sequence of order identifiers.
pub mod sequence;
/// The order store composing the sequence with per-order ledgers.
pub mod store;

pub use ledger::ItemLedger;
pub use sequence::OrderSequence;
pub use store::OrderStore;

use ledger_types::OrderId;
use thiserror::Error;

/// Errors returned by store operations.
///
/// None of these are fatal. `InvalidCount` is bad initialization input,
/// recoverable by re-prompting. The navigation variants are expected
/// boundary answers that callers use to enable or disable navigation
/// affordances. `OrderNotFound` is a defensive check: it cannot fire
/// for identifiers obtained from the store's own sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	/// Order count for initialization must be at least 1.
	#[error("order count must be a positive integer")]
	InvalidCount,
	/// No ledger is bound to the given identifier.
	#[error("order not found: {0}")]
	OrderNotFound(OrderId),
	/// The store holds no orders.
	#[error("store contains no orders")]
	EmptyStore,
	/// Navigation past the last order in the sequence.
	#[error("already at the last order")]
	AtTail,
	/// Navigation before the first order in the sequence.
	#[error("already at the first order")]
	AtHead,
}
