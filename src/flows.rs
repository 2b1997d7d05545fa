//! Login flow orchestration built around the [`Authenticator`] facade.

pub mod authorize;
pub mod exchange;
pub mod login;

pub use login::*;

// self
use crate::{
	_prelude::*,
	http::ExchangeHttpClient,
	provider::{ProviderConfig, ProviderRegistry},
};
#[cfg(feature = "reqwest")]
use crate::{error::ConfigError, http::ReqwestHttpClient};

/// Orchestrates the authorization-code login flow for a single provider.
///
/// The authenticator owns the provider configuration, the shared HTTP transport, and
/// the post-login redirect target, so the stage implementations can focus on protocol
/// sequencing. Configuration is resolved once at construction and never mutated;
/// each request carries its own code and token through locals only, leaving nothing
/// to synchronize between concurrent logins.
#[derive(Clone)]
pub struct Authenticator<C>
where
	C: ?Sized + ExchangeHttpClient,
{
	/// Provider configuration resolved at construction.
	pub config: ProviderConfig,
	/// Application URL the client is sent to after a completed login.
	pub post_login_url: Url,
	/// HTTP transport used for the token exchange.
	pub http_client: Arc<C>,
}
impl<C> Authenticator<C>
where
	C: ?Sized + ExchangeHttpClient,
{
	/// Creates an authenticator that reuses a caller-provided transport.
	pub fn with_http_client(
		config: ProviderConfig,
		post_login_url: Url,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { config, post_login_url, http_client: http_client.into() }
	}
}
#[cfg(feature = "reqwest")]
impl Authenticator<ReqwestHttpClient> {
	/// Creates an authenticator provisioning its own reqwest-backed transport.
	///
	/// The transport carries the default bounded timeout and follows no redirects.
	pub fn new(config: ProviderConfig, post_login_url: Url) -> Result<Self, ConfigError> {
		Ok(Self::with_http_client(config, post_login_url, ReqwestHttpClient::new()?))
	}
}
impl<C> Debug for Authenticator<C>
where
	C: ?Sized + ExchangeHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Authenticator")
			.field("config", &self.config)
			.field("post_login_url", &self.post_login_url)
			.finish()
	}
}

/// Factory handing out per-provider authenticators over a shared transport.
///
/// Constructed once at startup from the provider registry and read-only thereafter;
/// this replaces any per-provider singleton while keeping one-time config resolution.
#[derive(Clone)]
pub struct LoginGateway<C>
where
	C: ?Sized + ExchangeHttpClient,
{
	/// Registry of provider configurations.
	pub registry: ProviderRegistry,
	/// Application URL clients are sent to after a completed login.
	pub post_login_url: Url,
	/// HTTP transport shared by every authenticator.
	pub http_client: Arc<C>,
}
impl<C> LoginGateway<C>
where
	C: ?Sized + ExchangeHttpClient,
{
	/// Creates a gateway that reuses a caller-provided transport.
	pub fn with_http_client(
		registry: ProviderRegistry,
		post_login_url: Url,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { registry, post_login_url, http_client: http_client.into() }
	}

	/// Resolves the named provider and builds an authenticator for it.
	pub fn authenticator(&self, provider: &str) -> Result<Authenticator<C>> {
		let config = self.registry.get(provider)?.clone();

		Ok(Authenticator::with_http_client(
			config,
			self.post_login_url.clone(),
			self.http_client.clone(),
		))
	}
}
#[cfg(feature = "reqwest")]
impl LoginGateway<ReqwestHttpClient> {
	/// Creates a gateway provisioning its own reqwest-backed transport.
	pub fn new(registry: ProviderRegistry, post_login_url: Url) -> Result<Self, ConfigError> {
		Ok(Self::with_http_client(registry, post_login_url, ReqwestHttpClient::new()?))
	}
}
impl<C> Debug for LoginGateway<C>
where
	C: ?Sized + ExchangeHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LoginGateway")
			.field("registry", &self.registry)
			.field("post_login_url", &self.post_login_url)
			.finish()
	}
}
