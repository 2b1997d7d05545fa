//! Authorization-code login core for the Study Buddy backend: provider registry, redirect
//! building, token exchange, and framework-agnostic HTTP glue.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod provider;
pub mod store;
pub mod web;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::ProviderId, flows::Authenticator, http::ReqwestHttpClient, provider::ProviderConfig,
		web::HttpExchange,
	};

	/// Redirect target used by test authenticators after a completed login.
	pub const TEST_POST_LOGIN_URL: &str = "https://app.example.com/home";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds a complete provider configuration pointed at the provided mock endpoints.
	pub fn test_provider_config(auth_url: &str, token_url: &str) -> ProviderConfig {
		let id = ProviderId::new("mock-idp").expect("Test provider identifier should be valid.");

		ProviderConfig::builder(id)
			.auth_url(Url::parse(auth_url).expect("Mock authorization endpoint should parse."))
			.token_url(Url::parse(token_url).expect("Mock token endpoint should parse."))
			.client_id("client-it")
			.client_secret("secret-it")
			.redirect_uri(
				Url::parse("https://app.example.com/auth/callback")
					.expect("Test redirect URI should parse."),
			)
			.build()
	}

	/// Constructs an [`Authenticator`] wired to the insecure test transport.
	pub fn build_test_authenticator(
		auth_url: &str,
		token_url: &str,
	) -> Authenticator<ReqwestHttpClient> {
		Authenticator::with_http_client(
			test_provider_config(auth_url, token_url),
			Url::parse(TEST_POST_LOGIN_URL).expect("Test post-login URL should parse."),
			test_reqwest_http_client(),
		)
	}

	/// In-memory [`HttpExchange`] double that records everything a handler writes.
	#[derive(Debug, Default)]
	pub struct RecordedExchange {
		/// Query parameters visible to the handler under test.
		pub params: HashMap<String, String>,
		/// Status written by the handler, if any.
		pub status: Option<u16>,
		/// Redirect location written by the handler, if any.
		pub location: Option<Url>,
		/// JSON body written by the handler, if any.
		pub body: Option<serde_json::Value>,
	}
	impl RecordedExchange {
		/// Builds an exchange carrying the provided query parameters.
		pub fn with_params<I, K, V>(params: I) -> Self
		where
			I: IntoIterator<Item = (K, V)>,
			K: Into<String>,
			V: Into<String>,
		{
			Self {
				params: params.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
				..Self::default()
			}
		}

		/// Returns the response status, defaulting to 200 when the handler never set one.
		pub fn effective_status(&self) -> u16 {
			self.status.unwrap_or(200)
		}
	}
	impl HttpExchange for RecordedExchange {
		fn query_param(&self, name: &str) -> Option<String> {
			self.params.get(name).cloned()
		}

		fn redirect(&mut self, location: &Url) {
			self.location = Some(location.clone());
		}

		fn set_status(&mut self, status: u16) {
			self.status = Some(status);
		}

		fn write_json(&mut self, body: serde_json::Value) {
			self.body = Some(body);
		}
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
