//! Walks through resolving a provider from the registry, launching a login, and
//! validating the returned `state` the way a redirect handler would.

// std
use std::collections::HashMap;
// crates.io
use color_eyre::Result;
use url::Url;
// self
use studybuddy_auth::{
	auth::ProviderId,
	flows::LoginGateway,
	provider::{ProviderConfig, ProviderRegistry},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ProviderConfig::builder(ProviderId::new("fhict")?)
		.auth_url(Url::parse("https://identity.example.com/connect/authorize")?)
		.token_url(Url::parse("https://identity.example.com/connect/token")?)
		.client_id("demo-client")
		.client_secret("demo-secret")
		.redirect_uri(Url::parse("https://app.example.com/auth/callback")?)
		.scope("openid profile")
		.build();
	let registry = ProviderRegistry::new().with_provider(config);
	let gateway = LoginGateway::new(registry, Url::parse("https://app.example.com/home")?)?;
	let authenticator = gateway.authenticator("fhict")?;
	let redirect = authenticator.start_login()?;

	println!("Send your user to {}.", &redirect.url);

	let mut pending: HashMap<String, _> = HashMap::new();

	pending.insert(redirect.state.clone(), redirect.clone());

	// Simulate the callback handler looking up the pending login by `state`.
	let returned_state = redirect.state.clone();

	if let Some(stashed) = pending.remove(&returned_state) {
		stashed.validate_state(&returned_state)?;
		println!("Validated state for provider {}.", &authenticator.config.id);
		println!("Call Authenticator::complete_login with the callback's `code` next.");
	} else {
		eprintln!("State `{returned_state}` was not recognized.");
	}

	Ok(())
}
