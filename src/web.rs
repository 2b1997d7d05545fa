//! Framework-agnostic request/response glue for the backend's HTTP surface.
//!
//! Handlers are written against [`HttpExchange`], a minimal capability view of one
//! in-flight request/response pair, so the login flow and the user boundary stay
//! testable without a real HTTP stack. An embedding server adapts its own
//! request/response types to the trait and routes `/auth/login`, `/auth/callback`,
//! and the `/user` endpoints to the functions in [`auth`] and [`users`].

pub mod auth;
pub mod users;

// self
use crate::_prelude::*;

/// Capability view of a single HTTP request/response pair.
///
/// Implementations default the response status to 200 when [`set_status`] is never
/// called; [`redirect`] implies a 302 with the provided `Location`.
///
/// [`set_status`]: HttpExchange::set_status
/// [`redirect`]: HttpExchange::redirect
pub trait HttpExchange {
	/// Returns the decoded value of a query parameter, if present.
	fn query_param(&self, name: &str) -> Option<String>;

	/// Issues an HTTP redirect to the provided location.
	fn redirect(&mut self, location: &Url);

	/// Overrides the response status.
	fn set_status(&mut self, status: u16);

	/// Writes a JSON response body.
	fn write_json(&mut self, body: serde_json::Value);
}

/// Maps a flow error to the generic client-facing status + message pair.
///
/// The message is deliberately static text: provider responses, configuration
/// details, and secrets stay in server-side logs only.
pub(crate) fn error_response(error: &Error) -> (u16, &'static str) {
	match error {
		Error::MissingAuthorizationCode => (400, "Missing authorization code."),
		Error::StateMismatch => (400, "Authorization state mismatch."),
		Error::Config(_) => (500, "Authentication is not configured."),
		Error::Exchange(_) => (502, "Token exchange failed."),
		Error::Storage(_) => (500, "Internal Server Error"),
	}
}

pub(crate) fn respond_error(exchange: &mut impl HttpExchange, error: &Error) {
	let (status, message) = error_response(error);

	exchange.set_status(status);
	exchange.write_json(serde_json::json!({ "error": message }));
}
