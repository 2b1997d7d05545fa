//! Per-provider OAuth configuration values and their completeness rules.

// std
use std::env::{self, VarError};
// self
use crate::{_prelude::*, auth::ProviderId, error::ConfigError};

/// Immutable OAuth settings for one identity provider.
///
/// Instances are resolved by name at startup and never mutated afterwards. Endpoint
/// and credential fields are optional so partially configured deployments can be
/// represented; [`ProviderConfig::validate`] decides whether the configuration is
/// usable for login flows.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// Provider identifier resolved through the registry.
	pub id: ProviderId,
	/// Authorization endpoint the user is redirected to.
	pub auth_url: Option<Url>,
	/// Token endpoint used for the authorization-code exchange.
	pub token_url: Option<Url>,
	/// OAuth 2.0 client identifier issued by the provider.
	pub client_id: Option<String>,
	/// Confidential client secret, when the provider issued one.
	pub client_secret: Option<String>,
	/// Redirect URI registered with the provider for the callback.
	pub redirect_uri: Option<Url>,
	/// Space-delimited scope string requested at authorization time.
	pub scope: Option<String>,
}
impl ProviderConfig {
	/// Creates a new builder for the provided identifier.
	pub fn builder(id: ProviderId) -> ProviderConfigBuilder {
		ProviderConfigBuilder::new(id)
	}

	/// Loads the configuration for `id` from `OAUTH2_<NAME>_*` environment variables.
	///
	/// Absent and empty variables leave the corresponding field unset; unparsable
	/// endpoint URLs fail immediately with [`ConfigError::InvalidEndpoint`] and values
	/// that are not valid UTF-8 with [`ConfigError::MalformedEnvVar`]. Completeness is
	/// not checked here; callers run [`ProviderConfig::validate`] before use.
	pub fn from_env(id: ProviderId) -> Result<Self, ConfigError> {
		let prefix = format!("OAUTH2_{}", id.to_uppercase().replace('-', "_"));
		let var = |suffix: &str| {
			let name = format!("{prefix}_{suffix}");

			match env::var(&name) {
				Ok(value) if !value.is_empty() => Ok(Some(value)),
				Ok(_) | Err(VarError::NotPresent) => Ok(None),
				Err(VarError::NotUnicode(_)) => Err(ConfigError::MalformedEnvVar { name }),
			}
		};
		let endpoint = |suffix: &str, field: &'static str| {
			var(suffix)?
				.map(|raw| {
					Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint {
						provider: id.to_string(),
						field,
						source,
					})
				})
				.transpose()
		};
		let auth_url = endpoint("AUTH_URL", "auth_url")?;
		let token_url = endpoint("TOKEN_URL", "token_url")?;
		let redirect_uri = endpoint("REDIRECT_URI", "redirect_uri")?;
		let client_id = var("CLIENT_ID")?;
		let client_secret = var("CLIENT_SECRET")?;
		let scope = var("SCOPE")?;

		Ok(Self { id, auth_url, token_url, client_id, client_secret, redirect_uri, scope })
	}

	/// Checks the invariant required before any redirect or exchange operation.
	///
	/// `auth_url`, `client_id`, and `redirect_uri` must all be present, and every
	/// configured endpoint must use HTTPS. Violations are configuration errors, never
	/// runtime/user errors.
	pub fn validate(&self) -> Result<(), ConfigError> {
		self.require_auth_url()?;
		self.require_client_id()?;
		self.require_redirect_uri()?;

		if let Some(token_url) = self.token_url.as_ref() {
			validate_endpoint("token_url", token_url)?;
		}

		Ok(())
	}

	/// Returns the authorization endpoint or a [`ConfigError::MissingField`].
	pub fn require_auth_url(&self) -> Result<&Url, ConfigError> {
		let url = self.auth_url.as_ref().ok_or_else(|| self.missing("auth_url"))?;

		validate_endpoint("auth_url", url)?;

		Ok(url)
	}

	/// Returns the token endpoint or a [`ConfigError::MissingField`].
	pub fn require_token_url(&self) -> Result<&Url, ConfigError> {
		let url = self.token_url.as_ref().ok_or_else(|| self.missing("token_url"))?;

		validate_endpoint("token_url", url)?;

		Ok(url)
	}

	/// Returns the client identifier or a [`ConfigError::MissingField`].
	pub fn require_client_id(&self) -> Result<&str, ConfigError> {
		self.client_id.as_deref().ok_or_else(|| self.missing("client_id"))
	}

	/// Returns the redirect URI or a [`ConfigError::MissingField`].
	pub fn require_redirect_uri(&self) -> Result<&Url, ConfigError> {
		self.redirect_uri.as_ref().ok_or_else(|| self.missing("redirect_uri"))
	}

	fn missing(&self, field: &'static str) -> ConfigError {
		ConfigError::MissingField { provider: self.id.to_string(), field }
	}
}
impl Debug for ProviderConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderConfig")
			.field("id", &self.id)
			.field("auth_url", &self.auth_url)
			.field("token_url", &self.token_url)
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("redirect_uri", &self.redirect_uri)
			.field("scope", &self.scope)
			.finish()
	}
}

/// Builder for [`ProviderConfig`] values.
#[derive(Debug)]
pub struct ProviderConfigBuilder {
	/// Identifier for the configuration being constructed.
	pub id: ProviderId,
	/// Optional authorization endpoint.
	pub auth_url: Option<Url>,
	/// Optional token endpoint.
	pub token_url: Option<Url>,
	/// Optional client identifier.
	pub client_id: Option<String>,
	/// Optional client secret.
	pub client_secret: Option<String>,
	/// Optional redirect URI.
	pub redirect_uri: Option<Url>,
	/// Optional scope string.
	pub scope: Option<String>,
}
impl ProviderConfigBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(id: ProviderId) -> Self {
		Self {
			id,
			auth_url: None,
			token_url: None,
			client_id: None,
			client_secret: None,
			redirect_uri: None,
			scope: None,
		}
	}

	/// Sets the authorization endpoint.
	pub fn auth_url(mut self, url: Url) -> Self {
		self.auth_url = Some(url);

		self
	}

	/// Sets the token endpoint.
	pub fn token_url(mut self, url: Url) -> Self {
		self.token_url = Some(url);

		self
	}

	/// Sets the client identifier.
	pub fn client_id(mut self, value: impl Into<String>) -> Self {
		self.client_id = Some(value.into());

		self
	}

	/// Sets the client secret.
	pub fn client_secret(mut self, value: impl Into<String>) -> Self {
		self.client_secret = Some(value.into());

		self
	}

	/// Sets the redirect URI.
	pub fn redirect_uri(mut self, url: Url) -> Self {
		self.redirect_uri = Some(url);

		self
	}

	/// Sets the scope string requested at authorization time.
	pub fn scope(mut self, value: impl Into<String>) -> Self {
		self.scope = Some(value.into());

		self
	}

	/// Consumes the builder.
	///
	/// Completeness is deliberately not checked here; the orchestrator validates the
	/// configuration before every redirect or exchange so partially configured
	/// providers fail at use time with a precise [`ConfigError`].
	pub fn build(self) -> ProviderConfig {
		ProviderConfig {
			id: self.id,
			auth_url: self.auth_url,
			token_url: self.token_url,
			client_id: self.client_id,
			client_secret: self.client_secret,
			redirect_uri: self.redirect_uri,
			scope: self.scope,
		}
	}
}

fn validate_endpoint(field: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() != "https" {
		Err(ConfigError::InsecureEndpoint { field, url: url.to_string() })
	} else {
		Ok(())
	}
}
