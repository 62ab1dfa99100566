//! Registry trait for self-registering implementations.
//!
//! Pluggable backends (currently only storage) register themselves with
//! the name used in configuration files and a factory function, so the
//! runtime can resolve a configured name to a concrete implementation.

/// Base trait for implementation registries.
///
/// Each pluggable implementation provides a `Registry` struct that
/// implements this trait, declaring its configuration name and factory.
pub trait ImplementationRegistry {
	/// The name used in configuration files to reference this
	/// implementation, for example "file" for
	/// `storage.implementations.file`.
	const NAME: &'static str;

	/// The factory function type this implementation provides.
	type Factory;

	/// Returns the factory that creates instances of this
	/// implementation from its configuration section.
	fn factory() -> Self::Factory;
}
