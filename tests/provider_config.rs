// std
use std::env;
// self
use studybuddy_auth::{
	_preludet::*,
	auth::ProviderId,
	error::ConfigError,
	flows::LoginGateway,
	provider::{ProviderConfig, ProviderRegistry},
};

fn provider(name: &str) -> ProviderId {
	ProviderId::new(name).expect("Failed to build provider identifier for config tests.")
}

fn set_var(key: &str, value: &str) {
	// SAFETY: Test-only mutation; each test uses a unique variable prefix.
	unsafe {
		env::set_var(key, value);
	}
}

#[test]
fn from_env_loads_every_configured_field() {
	set_var("OAUTH2_ENV_FULL_AUTH_URL", "https://idp.example.com/auth");
	set_var("OAUTH2_ENV_FULL_TOKEN_URL", "https://idp.example.com/token");
	set_var("OAUTH2_ENV_FULL_REDIRECT_URI", "https://app.example.com/auth/callback");
	set_var("OAUTH2_ENV_FULL_CLIENT_ID", "env-client");
	set_var("OAUTH2_ENV_FULL_CLIENT_SECRET", "env-secret");
	set_var("OAUTH2_ENV_FULL_SCOPE", "openid profile");

	let config = ProviderConfig::from_env(provider("env-full"))
		.expect("Loading a fully populated environment should succeed.");

	config.validate().expect("The loaded configuration should be complete.");

	assert_eq!(
		config.auth_url.as_ref().map(Url::as_str),
		Some("https://idp.example.com/auth"),
	);
	assert_eq!(
		config.token_url.as_ref().map(Url::as_str),
		Some("https://idp.example.com/token"),
	);
	assert_eq!(config.client_id.as_deref(), Some("env-client"));
	assert_eq!(config.client_secret.as_deref(), Some("env-secret"));
	assert_eq!(config.scope.as_deref(), Some("openid profile"));
}

#[test]
fn from_env_leaves_absent_and_empty_variables_unset() {
	set_var("OAUTH2_ENV_SPARSE_CLIENT_ID", "sparse-client");
	set_var("OAUTH2_ENV_SPARSE_SCOPE", "");

	let config = ProviderConfig::from_env(provider("env-sparse"))
		.expect("Loading a sparse environment should succeed.");

	assert_eq!(config.client_id.as_deref(), Some("sparse-client"));
	assert!(config.auth_url.is_none());
	assert!(config.scope.is_none());

	let err = config.validate().expect_err("An incomplete configuration must not validate.");

	assert!(matches!(err, ConfigError::MissingField { field: "auth_url", .. }));
}

#[test]
fn from_env_rejects_unparsable_endpoints() {
	set_var("OAUTH2_ENV_BROKEN_AUTH_URL", "not a url");

	let err = ProviderConfig::from_env(provider("env-broken"))
		.expect_err("An unparsable endpoint must fail the load.");

	assert!(matches!(err, ConfigError::InvalidEndpoint { field: "auth_url", .. }));
}

#[cfg(unix)]
#[test]
fn from_env_rejects_values_that_are_not_utf8() {
	// std
	use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

	// SAFETY: Test-only mutation; the variable prefix is unique to this test.
	unsafe {
		env::set_var("OAUTH2_ENV_RAW_CLIENT_ID", OsStr::from_bytes(b"\xff\xfe"));
	}

	let err = ProviderConfig::from_env(provider("env-raw"))
		.expect_err("A non-UTF-8 value must fail the load instead of reading as unset.");

	assert!(matches!(
		err,
		ConfigError::MalformedEnvVar { name } if name == "OAUTH2_ENV_RAW_CLIENT_ID"
	));
}

#[test]
fn registry_from_env_resolves_each_identifier() {
	set_var("OAUTH2_ENV_REG_AUTH_URL", "https://idp.example.com/auth");
	set_var("OAUTH2_ENV_REG_CLIENT_ID", "reg-client");

	let registry = ProviderRegistry::from_env([provider("env-reg")])
		.expect("Building the registry from the environment should succeed.");

	assert_eq!(registry.len(), 1);
	assert_eq!(
		registry.get("env-reg").expect("The loaded provider should resolve.").client_id.as_deref(),
		Some("reg-client"),
	);
}

#[test]
fn gateway_hands_out_authenticators_for_known_providers_only() {
	let config =
		test_provider_config("https://idp.example.com/auth", "https://idp.example.com/token");
	let registry = ProviderRegistry::new().with_provider(config);
	let gateway = LoginGateway::with_http_client(
		registry,
		Url::parse(TEST_POST_LOGIN_URL).expect("Test post-login URL should parse."),
		test_reqwest_http_client(),
	);
	let authenticator = gateway
		.authenticator("mock-idp")
		.expect("A registered provider should yield an authenticator.");

	assert_eq!(authenticator.config.id.as_ref(), "mock-idp");
	assert_eq!(authenticator.post_login_url.as_str(), TEST_POST_LOGIN_URL);

	let err = gateway.authenticator("google").expect_err("Unknown providers must be rejected.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::UnknownProvider { name }) if name == "google"
	));
}
