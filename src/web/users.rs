//! User CRUD handlers delegating to the persistence collaborator.
//!
//! Boundary-only pass-through: route → store call → JSON response, with the response
//! shapes the front-end already depends on (`404 {"message": "User not found"}`,
//! `500 {"message": "Internal Server Error"}`).

// self
use crate::{
	_prelude::*,
	store::{StoreError, UserStore},
	web::HttpExchange,
};

/// Request body accepted by the username update route.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateUser {
	/// Replacement username.
	pub username: String,
}

/// Handles `GET /user` by listing every user.
pub async fn list_users<S, X>(store: &S, exchange: &mut X)
where
	S: ?Sized + UserStore,
	X: HttpExchange,
{
	match store.list().await {
		Ok(users) => ok_json(exchange, &users),
		Err(error) => internal_error(exchange, &error),
	}
}

/// Handles `GET /user/:id`.
pub async fn get_user<S, X>(store: &S, id: i64, exchange: &mut X)
where
	S: ?Sized + UserStore,
	X: HttpExchange,
{
	match store.find(id).await {
		Ok(Some(user)) => ok_json(exchange, &user),
		Ok(None) => not_found(exchange),
		Err(error) => internal_error(exchange, &error),
	}
}

/// Handles `PUT /user/:id` with an [`UpdateUser`] body.
pub async fn update_user<S, X>(store: &S, id: i64, payload: &UpdateUser, exchange: &mut X)
where
	S: ?Sized + UserStore,
	X: HttpExchange,
{
	match store.update_username(id, &payload.username).await {
		Ok(Some(updated)) => ok_json(exchange, &updated),
		Ok(None) => not_found(exchange),
		Err(error) => internal_error(exchange, &error),
	}
}

/// Handles `DELETE /user/:id`.
pub async fn delete_user<S, X>(store: &S, id: i64, exchange: &mut X)
where
	S: ?Sized + UserStore,
	X: HttpExchange,
{
	match store.delete(id).await {
		Ok(true) =>
			exchange.write_json(serde_json::json!({ "message": "User deleted successfully" })),
		Ok(false) => not_found(exchange),
		Err(error) => internal_error(exchange, &error),
	}
}

fn ok_json<T>(exchange: &mut impl HttpExchange, body: &T)
where
	T: Serialize,
{
	match serde_json::to_value(body) {
		Ok(value) => exchange.write_json(value),
		Err(error) => {
			let error = StoreError::Serialization { message: error.to_string() };

			internal_error(exchange, &error);
		},
	}
}

fn not_found(exchange: &mut impl HttpExchange) {
	exchange.set_status(404);
	exchange.write_json(serde_json::json!({ "message": "User not found" }));
}

fn internal_error(exchange: &mut impl HttpExchange, error: &StoreError) {
	#[cfg(feature = "tracing")]
	tracing::error!(%error, "User store operation failed.");
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}

	exchange.set_status(500);
	exchange.write_json(serde_json::json!({ "message": "Internal Server Error" }));
}
