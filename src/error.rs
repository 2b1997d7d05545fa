//! Crate-level error types shared across the provider registry, flows, and the HTTP surface.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Every variant is safe to render to server-side logs: no variant embeds the client
/// secret or a verbatim provider response body.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; fatal to the current request, not to the process.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token exchange failure; recoverable only by restarting the login flow.
	#[error(transparent)]
	Exchange(#[from] ExchangeError),
	/// Storage-layer failure reported by the user persistence collaborator.
	#[error("{0}")]
	Storage(#[from] crate::store::StoreError),

	/// Authorization callback arrived without a `code` query parameter.
	#[error("Authorization callback is missing the `code` query parameter.")]
	MissingAuthorizationCode,
	/// Returned `state` value did not match the one issued at login initiation.
	#[error("Authorization state mismatch.")]
	StateMismatch,
}

/// Configuration and validation failures raised before any network interaction.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Requested provider name has no registered configuration.
	#[error("No provider named `{name}` is configured.")]
	UnknownProvider {
		/// Provider name as supplied by the caller.
		name: String,
	},
	/// Provider configuration is missing a required setting.
	#[error("Provider `{provider}` is missing its `{field}` configuration.")]
	MissingField {
		/// Provider identifier string.
		provider: String,
		/// Name of the absent setting.
		field: &'static str,
	},
	/// Environment or deployment configuration carried an unparsable URL.
	#[error("Provider `{provider}` has an invalid `{field}` URL.")]
	InvalidEndpoint {
		/// Provider identifier string.
		provider: String,
		/// Name of the offending setting.
		field: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Environment variable is present but not valid UTF-8.
	#[error("Environment variable `{name}` contains invalid UTF-8.")]
	MalformedEnvVar {
		/// Full variable name.
		name: String,
	},
	/// Configured endpoints must use HTTPS.
	#[error("The `{field}` endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Name of the offending setting.
		field: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures surfaced by the single token-exchange attempt.
///
/// Authorization codes are single-use, so none of these variants is ever retried
/// automatically; the user must restart the flow from login initiation.
#[derive(Debug, ThisError)]
pub enum ExchangeError {
	/// Token endpoint answered with a non-2xx status.
	#[error("Token endpoint rejected the exchange with status {status}.")]
	Rejected {
		/// HTTP status code returned by the provider.
		status: u16,
		/// Standard OAuth `error` code parsed from the response, when present.
		///
		/// Only this single field is retained; the raw body is discarded so it can
		/// never leak into logs or client responses.
		oauth_error: Option<String>,
	},
	/// Token endpoint responded with malformed JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the unparsable response.
		status: u16,
	},
	/// Token endpoint response omitted the `access_token` field.
	#[error("Token endpoint response is missing access_token.")]
	MissingAccessToken {
		/// HTTP status code of the incomplete response.
		status: u16,
	},
	/// Exchange request exceeded the transport's bounded timeout.
	#[error("Request timed out while calling the token endpoint.")]
	Timeout,
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl ExchangeError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ExchangeError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::Timeout } else { Self::network(e) }
	}
}
