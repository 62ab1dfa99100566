//! Configuration module for the order ledger store.
//!
//! Provides structures and utilities for loading store configuration
//! from TOML files, with validation to ensure the configured storage
//! backend is actually defined.

use ledger_types::DEFAULT_LABEL_PREFIX;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the input dump
		ConfigError::Parse(err.message().to_string())
	}
}

/// Main configuration structure for the order ledger store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Configuration for the store itself.
	#[serde(default)]
	pub store: StoreConfig,
	/// Configuration for the storage backend.
	pub storage: StorageConfig,
}

/// Configuration for the store itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
	/// Prefix for generated order labels.
	/// Defaults to "order" if not specified.
	#[serde(default = "default_label_prefix")]
	pub label_prefix: String,
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self {
			label_prefix: default_label_prefix(),
		}
	}
}

/// Returns the default order label prefix.
fn default_label_prefix() -> String {
	DEFAULT_LABEL_PREFIX.to_string()
}

/// Configuration for the storage backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
	/// Which implementation to use as primary.
	pub primary: String,
	/// Map of storage implementation names to their configurations.
	/// Each implementation has its own format stored as raw TOML values.
	#[serde(default)]
	pub implementations: HashMap<String, toml::Value>,
}

impl Config {
	/// Loads configuration from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		content.parse()
	}

	/// Validates the configuration.
	///
	/// The configured primary backend must be named and have a matching
	/// entry in the implementations table.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.storage.primary.is_empty() {
			return Err(ConfigError::Validation(
				"storage.primary must not be empty".into(),
			));
		}
		if !self
			.storage
			.implementations
			.contains_key(&self.storage.primary)
		{
			return Err(ConfigError::Validation(format!(
				"storage.primary '{}' has no matching entry in storage.implementations",
				self.storage.primary
			)));
		}
		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let config: Config = toml::from_str(s)?;
		config.validate()?;
		Ok(config)
	}
}
