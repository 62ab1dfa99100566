//! Storage module for the order ledger store.
//!
//! This module provides the byte-level backend abstraction used to
//! persist store snapshots, concrete file and in-memory backends, and
//! the typed persistence gateway callers use to save and restore the
//! store across process restarts.

use async_trait::async_trait;
use ledger_types::{ConfigSchema, ImplementationRegistry, StoreSnapshot};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod file;
	pub mod memory;
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
	/// Error that occurs when a requested artifact is not found.
	#[error("Not found")]
	NotFound,
	/// Error that occurs during serialization/deserialization.
	#[error("Serialization error: {0}")]
	Serialization(String),
	/// Error that occurs in the storage backend.
	#[error("Backend error: {0}")]
	Backend(String),
	/// Error that occurs during configuration validation.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Trait defining the low-level interface for storage backends.
///
/// Backends provide key-addressed byte storage; everything typed lives
/// in [`PersistenceGateway`]. A backend must never leave a
/// readable-but-corrupt artifact behind after a failed write.
#[async_trait]
pub trait StorageInterface: Send + Sync {
	/// Retrieves raw bytes for the given key.
	async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError>;

	/// Stores raw bytes, replacing any previous value atomically from
	/// the caller's point of view.
	async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

	/// Deletes the value associated with the given key.
	async fn delete(&self, key: &str) -> Result<(), StorageError>;

	/// Checks if a key exists in storage.
	async fn exists(&self, key: &str) -> Result<bool, StorageError>;

	/// Returns the configuration schema for validation.
	fn config_schema(&self) -> Box<dyn ConfigSchema>;
}

/// Type alias for storage factory functions.
///
/// This is the function signature that all storage implementations must
/// provide to create instances of their storage interface.
pub type StorageFactory = fn(&toml::Value) -> Result<Box<dyn StorageInterface>, StorageError>;

/// Registry trait for storage implementations.
pub trait StorageRegistry: ImplementationRegistry<Factory = StorageFactory> {}

/// Get all registered storage implementations.
///
/// Returns a vector of (name, factory) tuples for all available storage
/// implementations, used to resolve the backend named in configuration.
pub fn get_all_implementations() -> Vec<(&'static str, StorageFactory)> {
	use implementations::{file, memory};

	vec![
		(file::Registry::NAME, file::Registry::factory()),
		(memory::Registry::NAME, memory::Registry::factory()),
	]
}

/// Key under which the store snapshot artifact lives.
const SNAPSHOT_KEY: &str = "snapshot:current";

/// High-level persistence gateway that provides typed operations.
///
/// Wraps a low-level backend and handles serialization of the store
/// snapshot. The gateway knows only the snapshot's exposed shape, not
/// the store's internals.
pub struct PersistenceGateway {
	/// The underlying storage backend implementation.
	backend: Box<dyn StorageInterface>,
}

impl PersistenceGateway {
	/// Creates a new gateway over the specified backend.
	pub fn new(backend: Box<dyn StorageInterface>) -> Self {
		Self { backend }
	}

	/// Stores a serializable value under a key as JSON.
	async fn store<T: Serialize>(&self, key: &str, data: &T) -> Result<(), StorageError> {
		let bytes =
			serde_json::to_vec(data).map_err(|e| StorageError::Serialization(e.to_string()))?;
		self.backend.set_bytes(key, bytes).await
	}

	/// Retrieves and deserializes a value from storage.
	async fn retrieve<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
		let bytes = self.backend.get_bytes(key).await?;
		serde_json::from_slice(&bytes).map_err(|e| StorageError::Serialization(e.to_string()))
	}

	/// Persists a snapshot, replacing any previous artifact.
	///
	/// Failure is reported to the caller, never raised as a fatal
	/// process error; how to surface it is the caller's decision.
	pub async fn save_snapshot(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
		self.store(SNAPSHOT_KEY, snapshot).await
	}

	/// Restores the previously saved snapshot.
	///
	/// A missing artifact is the normal first-run state and yields the
	/// empty default silently. A corrupt or unreadable artifact also
	/// yields the empty default, with the failure reported through a
	/// log entry instead of an error: losing a saved snapshot is
	/// tolerated here, crashing at startup is not.
	pub async fn load_snapshot(&self) -> StoreSnapshot {
		match self.retrieve(SNAPSHOT_KEY).await {
			Ok(snapshot) => snapshot,
			Err(StorageError::NotFound) => StoreSnapshot::default(),
			Err(err) => {
				tracing::warn!(error = %err, "discarding unreadable snapshot artifact");
				StoreSnapshot::default()
			},
		}
	}

	/// Returns whether a snapshot artifact exists.
	pub async fn has_snapshot(&self) -> Result<bool, StorageError> {
		self.backend.exists(SNAPSHOT_KEY).await
	}

	/// Removes the snapshot artifact if present.
	pub async fn clear_snapshot(&self) -> Result<(), StorageError> {
		self.backend.delete(SNAPSHOT_KEY).await
	}
}
