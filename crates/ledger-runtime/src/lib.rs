//! Runtime assembly for the order ledger store.
//!
//! Wires configuration to a storage backend, restores persisted state
//! at startup, and exposes the owned store together with an explicit
//! save operation. There is no ambient singleton: callers hold the
//! runtime and reach the store through it.

use ledger_config::Config;
use ledger_core::OrderStore;
use ledger_storage::{
	get_all_implementations, PersistenceGateway, StorageError, StorageInterface,
};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while assembling or persisting the store.
#[derive(Debug, Error)]
pub enum RuntimeError {
	/// Error that occurs when configuration cannot be loaded or is
	/// inconsistent with the available implementations.
	#[error("Configuration error: {0}")]
	Config(String),
	/// Error that occurs in the storage layer.
	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),
}

/// An owned order store bound to its persistence gateway.
///
/// Construction restores whatever snapshot the configured backend
/// holds; `save` persists the current state. Mutations go through
/// [`StoreRuntime::store_mut`] — the runtime adds no interception.
pub struct StoreRuntime {
	store: OrderStore,
	gateway: PersistenceGateway,
}

impl StoreRuntime {
	/// Builds a runtime from validated configuration.
	///
	/// Resolves the configured primary backend through the registry,
	/// validates its TOML section against the backend's schema, then
	/// restores the previously saved snapshot (or starts empty on the
	/// first run or after an unreadable artifact).
	pub async fn from_config(config: &Config) -> Result<Self, RuntimeError> {
		let backend = build_backend(config)?;
		let gateway = PersistenceGateway::new(backend);

		let snapshot = gateway.load_snapshot().await;
		let store =
			OrderStore::from_snapshot_with_prefix(snapshot, config.store.label_prefix.as_str());
		tracing::info!(orders = store.len(), "order store restored");

		Ok(Self { store, gateway })
	}

	/// Loads configuration from a TOML file, then builds the runtime.
	pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, RuntimeError> {
		let config =
			Config::from_file(path).map_err(|e| RuntimeError::Config(e.to_string()))?;
		Self::from_config(&config).await
	}

	/// Returns the owned store.
	pub fn store(&self) -> &OrderStore {
		&self.store
	}

	/// Returns the owned store for mutation.
	pub fn store_mut(&mut self) -> &mut OrderStore {
		&mut self.store
	}

	/// Persists the current store state.
	///
	/// Failure is returned for the caller to surface; the store in
	/// memory is unaffected either way.
	pub async fn save(&self) -> Result<(), RuntimeError> {
		self.gateway.save_snapshot(&self.store.snapshot()).await?;
		Ok(())
	}
}

/// Resolves and constructs the storage backend named in configuration.
fn build_backend(config: &Config) -> Result<Box<dyn StorageInterface>, RuntimeError> {
	let name = config.storage.primary.as_str();
	let factory = get_all_implementations()
		.into_iter()
		.find_map(|(impl_name, factory)| (impl_name == name).then_some(factory))
		.ok_or_else(|| {
			RuntimeError::Config(format!("unknown storage implementation '{}'", name))
		})?;

	let section = config
		.storage
		.implementations
		.get(name)
		.cloned()
		.unwrap_or_else(|| toml::Value::Table(Default::default()));

	let backend = factory(&section)?;
	backend
		.config_schema()
		.validate(&section)
		.map_err(|e| RuntimeError::Config(e.to_string()))?;

	Ok(backend)
}
