//! Authentication orchestrator sequencing initiate → callback → exchange.
//!
//! The flow is request/response glue: initiation answers one HTTP request with a
//! provider redirect, and the provider's callback arrives as a separate request that
//! performs the exchange. No state is persisted server-side between the two;
//! correlation relies on the provider redirect, with [`LoginRedirect::validate_state`]
//! offered to callers that maintain their own correlation storage.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	flows::{Authenticator, authorize, exchange},
	http::ExchangeHttpClient,
	obs::{self, FlowOutcome, FlowSpan, FlowStage},
	provider::ProviderConfig,
};

const STATE_LEN: usize = 32;

/// Provider redirect produced by login initiation.
#[derive(Clone, Debug)]
pub struct LoginRedirect {
	/// Fully-formed authorization URL the client should be redirected to.
	pub url: Url,
	/// Opaque per-flow state value embedded in the URL.
	pub state: String,
}
impl LoginRedirect {
	/// Validates the `state` parameter returned by the authorization redirect.
	///
	/// Useful only to callers that stash the issued value between requests; the
	/// HTTP surface in this crate carries no session layer to do so.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if returned_state == self.state { Ok(()) } else { Err(Error::StateMismatch) }
	}
}

/// Outcome of a completed login.
///
/// The access token is handed to the caller and not persisted here; resolving or
/// creating the matching local user is delegated to the embedding application.
#[derive(Clone, Debug)]
pub struct CompletedLogin {
	/// Access token returned by the provider's token endpoint.
	pub access_token: AccessToken,
	/// Application URL the client should be redirected to.
	pub redirect: Url,
}

impl<C> Authenticator<C>
where
	C: ?Sized + ExchangeHttpClient,
{
	/// Starts a login by building the provider redirect.
	///
	/// Re-validates configuration completeness first, so misconfigured providers fail
	/// with a [`ConfigError`](crate::error::ConfigError) before any network
	/// interaction. A fresh random `state` is generated per flow and embedded in the
	/// returned URL.
	pub fn start_login(&self) -> Result<LoginRedirect> {
		const STAGE: FlowStage = FlowStage::Initiate;

		let span = FlowSpan::new(STAGE, "start_login");

		obs::record_login_outcome(STAGE, FlowOutcome::Attempt);

		let result = span.in_scope(|| self.build_login_redirect());

		observe(&self.config, STAGE, result)
	}

	/// Handles the provider callback and performs the code exchange.
	///
	/// `code` is the raw `code` query parameter from the callback request; its absence
	/// fails with [`Error::MissingAuthorizationCode`] before configuration is even
	/// consulted, and configuration gaps fail before the exchange POST is issued.
	pub async fn complete_login(&self, code: Option<&str>) -> Result<CompletedLogin> {
		const STAGE: FlowStage = FlowStage::Callback;

		let span = FlowSpan::new(STAGE, "complete_login");

		obs::record_login_outcome(STAGE, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let code = code.ok_or(Error::MissingAuthorizationCode)?;

				self.config.validate()?;

				self.exchange_code(code).await
			})
			.await;

		observe(&self.config, STAGE, result)
	}

	fn build_login_redirect(&self) -> Result<LoginRedirect> {
		self.config.validate()?;

		let state = random_state();
		let url = authorize::authorize_url(&self.config, Some(&state))?;

		Ok(LoginRedirect { url, state })
	}

	async fn exchange_code(&self, code: &str) -> Result<CompletedLogin> {
		const STAGE: FlowStage = FlowStage::Exchange;

		let span = FlowSpan::new(STAGE, "exchange_code");

		obs::record_login_outcome(STAGE, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let token_url = exchange::token_url(code, &self.config)?;
				let access_token =
					exchange::exchange_token(self.http_client.as_ref(), &token_url).await?;

				Ok(CompletedLogin { access_token, redirect: self.post_login_url.clone() })
			})
			.await;

		observe(&self.config, STAGE, result)
	}
}

/// Records the stage outcome and logs failures with provider + stage context.
fn observe<T>(config: &ProviderConfig, stage: FlowStage, result: Result<T>) -> Result<T> {
	match &result {
		Ok(_) => obs::record_login_outcome(stage, FlowOutcome::Success),
		Err(error) => {
			obs::log_flow_failure(stage, &config.id, error);
			obs::record_login_outcome(stage, FlowOutcome::Failure);
		},
	}

	result
}

fn random_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}
