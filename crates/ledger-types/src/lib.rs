//! Common types module for the order ledger store.
//!
//! This module defines the data types shared across the store, storage,
//! and configuration crates so that every component agrees on the shape
//! of orders, items, and persisted snapshots.

/// Item entry types for per-order ledgers.
pub mod item;
/// Order identifier types.
pub mod order;
/// Registry trait for self-registering implementations.
pub mod registry;
/// Persisted snapshot shape for the order store.
pub mod snapshot;
/// Configuration validation types for ensuring type-safe configurations.
pub mod validation;

// Re-export all types for convenient access
pub use item::*;
pub use order::*;
pub use registry::*;
pub use snapshot::*;
pub use validation::*;
