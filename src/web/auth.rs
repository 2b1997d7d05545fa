//! Login and callback handlers.

// self
use crate::{
	flows::{Authenticator, CompletedLogin, LoginRedirect},
	http::ExchangeHttpClient,
	web::{self, HttpExchange},
};

/// Handles the login initiation route by redirecting to the provider.
///
/// Returns the issued [`LoginRedirect`] so an embedding server with its own session
/// layer can stash the `state` value for callback verification; this surface keeps
/// none itself.
pub fn login<C, X>(authenticator: &Authenticator<C>, exchange: &mut X) -> Option<LoginRedirect>
where
	C: ?Sized + ExchangeHttpClient,
	X: HttpExchange,
{
	match authenticator.start_login() {
		Ok(redirect) => {
			exchange.redirect(&redirect.url);

			Some(redirect)
		},
		Err(error) => {
			web::respond_error(exchange, &error);

			None
		},
	}
}

/// Handles the provider callback route.
///
/// Reads the `code` query parameter, runs the exchange, and redirects the client to
/// the configured post-login URL. Failures answer with a generic JSON error body;
/// the full error stays in server-side logs.
pub async fn callback<C, X>(
	authenticator: &Authenticator<C>,
	exchange: &mut X,
) -> Option<CompletedLogin>
where
	C: ?Sized + ExchangeHttpClient,
	X: HttpExchange,
{
	let code = exchange.query_param("code");

	match authenticator.complete_login(code.as_deref()).await {
		Ok(completed) => {
			exchange.redirect(&completed.redirect);

			Some(completed)
		},
		Err(error) => {
			web::respond_error(exchange, &error);

			None
		},
	}
}
