//! Transport primitives for the token exchange.
//!
//! [`ExchangeHttpClient`] is the crate's only dependency on an HTTP stack. The flow
//! layer hands it a fully built token URL and expects the raw status + body back;
//! classifying non-2xx statuses and parsing the JSON payload stay with the flow so
//! custom transports carry no protocol knowledge. Implementations must apply a
//! bounded timeout and must not follow redirects; token endpoints return results
//! directly instead of delegating to another URI.

// std
use std::time::Duration;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::{header::CONTENT_TYPE, redirect::Policy};
// self
use crate::{_prelude::*, error::ExchangeError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Timeout applied to exchange requests when the caller does not override it.
pub const DEFAULT_EXCHANGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Future returned by transport implementations.
pub type TransportFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, ExchangeError>> + 'a + Send>>;

/// Raw token endpoint response handed back to the flow layer.
#[derive(Clone, Debug)]
pub struct TokenEndpointReply {
	/// HTTP status code returned by the token endpoint.
	pub status: u16,
	/// Raw response body bytes.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP transports capable of executing the token-exchange POST.
///
/// Implementations are shared behind `Arc` across concurrent requests, so they must
/// be `Send + Sync + 'static` and the returned futures must be `Send`. Exactly one
/// outbound request is issued per call; transport-level failures map to
/// [`ExchangeError::Timeout`] or [`ExchangeError::Network`], while any response that
/// arrived, 2xx or not, resolves to a [`TokenEndpointReply`].
pub trait ExchangeHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Issues a single `application/x-www-form-urlencoded` POST to `url`.
	///
	/// The exchange parameters travel in the URL's query string, mirroring the shape
	/// produced by the flow layer's token URL builder.
	fn post_form<'a>(&'a self, url: &'a Url) -> TransportFuture<'a, TokenEndpointReply>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with [`DEFAULT_EXCHANGE_TIMEOUT`] and redirect following disabled.
	pub fn new() -> Result<Self, ConfigError> {
		Self::with_timeout(DEFAULT_EXCHANGE_TIMEOUT)
	}

	/// Builds a client with a caller-chosen request timeout.
	///
	/// The bound keeps a stalled provider from pinning request-handling resources
	/// indefinitely; redirect following stays disabled.
	pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.redirect(Policy::none())
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	/// Wraps an existing [`ReqwestClient`].
	///
	/// Configure the client to disable redirect following and to carry a bounded
	/// timeout; the wrapper does not retrofit either setting.
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ExchangeHttpClient for ReqwestHttpClient {
	fn post_form<'a>(&'a self, url: &'a Url) -> TransportFuture<'a, TokenEndpointReply> {
		let client = self.0.clone();
		let url = url.clone();

		Box::pin(async move {
			let response = client
				.post(url)
				.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
				.send()
				.await
				.map_err(ExchangeError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(ExchangeError::from)?.to_vec();

			Ok(TokenEndpointReply { status, body })
		})
	}
}
