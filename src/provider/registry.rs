//! Name-to-configuration registry built once at startup.

// self
use crate::{_prelude::*, auth::ProviderId, error::ConfigError, provider::ProviderConfig};

/// Immutable mapping from provider name to configuration.
///
/// Built during application startup and shared read-only afterwards (typically behind
/// an `Arc`), which keeps one-time config resolution without any mutable global.
#[derive(Clone, Debug, Default)]
pub struct ProviderRegistry {
	providers: HashMap<ProviderId, ProviderConfig>,
}
impl ProviderRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a provider configuration.
	pub fn with_provider(mut self, config: ProviderConfig) -> Self {
		self.providers.insert(config.id.clone(), config);

		self
	}

	/// Loads one configuration per identifier from the environment.
	pub fn from_env<I>(ids: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = ProviderId>,
	{
		let mut registry = Self::new();

		for id in ids {
			registry = registry.with_provider(ProviderConfig::from_env(id)?);
		}

		Ok(registry)
	}

	/// Looks up the configuration registered under `name`.
	///
	/// Pure lookup with no side effects; safe to call from any task. Unknown names are
	/// a configuration error, not a runtime/user error.
	pub fn get(&self, name: &str) -> Result<&ProviderConfig, ConfigError> {
		self.providers.get(name).ok_or_else(|| ConfigError::UnknownProvider { name: name.into() })
	}

	/// Returns the number of registered providers.
	pub fn len(&self) -> usize {
		self.providers.len()
	}

	/// Returns `true` when no provider is registered.
	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Iterates over the registered configurations.
	pub fn iter(&self) -> impl Iterator<Item = &ProviderConfig> {
		self.providers.values()
	}
}
