//! Token endpoint URL construction and the single-attempt code exchange.
//!
//! Authorization codes are single-use and short-lived, so [`exchange_token`] issues
//! exactly one POST per call; a retry would be rejected by the provider anyway.

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ConfigError, ExchangeError},
	http::ExchangeHttpClient,
	provider::ProviderConfig,
};

/// Minimal slice of the token endpoint's JSON response the flow cares about.
#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
	access_token: Option<String>,
}

/// Standard OAuth error body; only the `error` code is retained.
#[derive(Debug, Deserialize)]
struct OAuthErrorBody {
	error: Option<String>,
}

/// Builds the token endpoint URL for exchanging `code`.
///
/// Carries `code`, `client_id`, `client_secret` (when configured), `redirect_uri`,
/// and `grant_type=authorization_code` as URL-encoded query parameters, matching the
/// encoding rules of the authorization redirect.
pub fn token_url(code: &str, config: &ProviderConfig) -> Result<Url, ConfigError> {
	let mut url = config.require_token_url()?.clone();
	let client_id = config.require_client_id()?;
	let redirect_uri = config.require_redirect_uri()?;
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair("code", code);
	pairs.append_pair("client_id", client_id);

	if let Some(secret) = config.client_secret.as_deref() {
		pairs.append_pair("client_secret", secret);
	}

	pairs.append_pair("redirect_uri", redirect_uri.as_str());
	pairs.append_pair("grant_type", "authorization_code");

	drop(pairs);

	Ok(url)
}

/// Performs the exchange POST and parses `access_token` from the JSON response.
///
/// Non-2xx statuses fail with [`ExchangeError::Rejected`] carrying only the status
/// and the parsed OAuth `error` code, never the raw body. Malformed JSON and
/// responses without an `access_token` field fail with their own variants so the
/// failure stage is diagnosable from logs alone.
pub async fn exchange_token<C>(
	http_client: &C,
	token_url: &Url,
) -> Result<AccessToken, ExchangeError>
where
	C: ?Sized + ExchangeHttpClient,
{
	let reply = http_client.post_form(token_url).await?;

	if !(200..300).contains(&reply.status) {
		return Err(ExchangeError::Rejected {
			status: reply.status,
			oauth_error: parse_oauth_error(&reply.body),
		});
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&reply.body);
	let response: TokenEndpointResponse = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| ExchangeError::ResponseParse { source, status: reply.status })?;
	let token = response
		.access_token
		.ok_or(ExchangeError::MissingAccessToken { status: reply.status })?;

	Ok(AccessToken::new(token))
}

fn parse_oauth_error(body: &[u8]) -> Option<String> {
	serde_json::from_slice::<OAuthErrorBody>(body).ok().and_then(|parsed| parsed.error)
}
