#![cfg(feature = "reqwest")]

// std
use std::{error::Error as StdError, time::Duration};
// crates.io
use httpmock::prelude::*;
// self
use studybuddy_auth::{
	_preludet::*,
	error::ExchangeError,
	flows::Authenticator,
	http::{ExchangeHttpClient, ReqwestHttpClient, TokenEndpointReply, TransportFuture},
};

#[derive(Debug)]
struct ConnectionReset;
impl Display for ConnectionReset {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Connection reset by peer.")
	}
}
impl StdError for ConnectionReset {}

#[derive(Clone, Copy, Debug)]
enum FailureMode {
	Timeout,
	ConnectionReset,
}

struct FailingTransport(FailureMode);
impl ExchangeHttpClient for FailingTransport {
	fn post_form<'a>(&'a self, _url: &'a Url) -> TransportFuture<'a, TokenEndpointReply> {
		let mode = self.0;

		Box::pin(async move {
			match mode {
				FailureMode::Timeout => Err(ExchangeError::Timeout),
				FailureMode::ConnectionReset => Err(ExchangeError::network(ConnectionReset)),
			}
		})
	}
}

fn transport_authenticator(mode: FailureMode) -> Authenticator<FailingTransport> {
	Authenticator::with_http_client(
		test_provider_config("https://idp.example.com/auth", "https://idp.example.com/token"),
		Url::parse(TEST_POST_LOGIN_URL).expect("Test post-login URL should parse."),
		FailingTransport(mode),
	)
}

#[tokio::test]
async fn network_failures_surface_through_the_callback() {
	let authenticator = transport_authenticator(FailureMode::ConnectionReset);
	let err = authenticator
		.complete_login(Some("valid-code"))
		.await
		.expect_err("A transport-level failure must fail the exchange.");

	assert!(matches!(err, Error::Exchange(ExchangeError::Network { .. })));
	assert!(
		!err.to_string().contains("Connection reset"),
		"The rendered error must not quote transport internals.",
	);
}

#[tokio::test]
async fn transport_timeouts_surface_through_the_callback() {
	let authenticator = transport_authenticator(FailureMode::Timeout);
	let err = authenticator
		.complete_login(Some("valid-code"))
		.await
		.expect_err("A transport timeout must fail the exchange.");

	assert!(matches!(err, Error::Exchange(ExchangeError::Timeout)));
}

#[tokio::test]
async fn slow_token_endpoints_map_to_timeout() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"late\"}")
				.delay(Duration::from_secs(2));
		})
		.await;
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.timeout(Duration::from_millis(100))
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");
	let authenticator = Authenticator::with_http_client(
		test_provider_config(&server.url("/authorize"), &server.url("/token")),
		Url::parse(TEST_POST_LOGIN_URL).expect("Test post-login URL should parse."),
		ReqwestHttpClient::with_client(client),
	);
	let err = authenticator
		.complete_login(Some("valid-code"))
		.await
		.expect_err("A stalled token endpoint must time the exchange out.");

	assert!(matches!(err, Error::Exchange(ExchangeError::Timeout)));
}
