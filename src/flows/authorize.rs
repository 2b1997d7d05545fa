//! Authorization redirect URL construction.

// self
use crate::{_prelude::*, error::ConfigError, provider::ProviderConfig};

/// Builds the provider authorization URL the user is redirected to.
///
/// Appends `client_id`, `redirect_uri`, and `response_type=code` to the configured
/// authorization endpoint, followed by the configured `scope` and the caller's
/// `state` when present. Every value is URL-encoded. Pure function of its inputs;
/// no network call is made.
pub fn authorize_url(config: &ProviderConfig, state: Option<&str>) -> Result<Url, ConfigError> {
	let mut url = config.require_auth_url()?.clone();
	let client_id = config.require_client_id()?;
	let redirect_uri = config.require_redirect_uri()?;
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair("client_id", client_id);
	pairs.append_pair("redirect_uri", redirect_uri.as_str());
	pairs.append_pair("response_type", "code");

	if let Some(scope) = config.scope.as_deref() {
		pairs.append_pair("scope", scope);
	}
	if let Some(state) = state {
		pairs.append_pair("state", state);
	}

	drop(pairs);

	Ok(url)
}
