#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use studybuddy_auth::{
	_preludet::*,
	store::{MemoryUserStore, StoreError, StoreFuture, User, UserStore},
	web::{auth, users, users::UpdateUser},
};

struct FailingUserStore;
impl UserStore for FailingUserStore {
	fn list(&self) -> StoreFuture<'_, Vec<User>> {
		Box::pin(async { Err(StoreError::Backend { message: "connection refused".into() }) })
	}

	fn find(&self, _: i64) -> StoreFuture<'_, Option<User>> {
		Box::pin(async { Err(StoreError::Backend { message: "connection refused".into() }) })
	}

	fn find_by_username<'a>(&'a self, _: &'a str) -> StoreFuture<'a, Option<User>> {
		Box::pin(async { Err(StoreError::Backend { message: "connection refused".into() }) })
	}

	fn create<'a>(&'a self, _: &'a str) -> StoreFuture<'a, User> {
		Box::pin(async { Err(StoreError::Backend { message: "connection refused".into() }) })
	}

	fn update_username<'a>(&'a self, _: i64, _: &'a str) -> StoreFuture<'a, Option<User>> {
		Box::pin(async { Err(StoreError::Backend { message: "connection refused".into() }) })
	}

	fn delete(&self, _: i64) -> StoreFuture<'_, bool> {
		Box::pin(async { Err(StoreError::Backend { message: "connection refused".into() }) })
	}
}

#[tokio::test]
async fn login_route_redirects_to_the_provider() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server.url("/authorize"), &server.url("/token"));
	let mut exchange = RecordedExchange::default();
	let redirect = auth::login(&authenticator, &mut exchange)
		.expect("A complete configuration should issue a redirect.");
	let location = exchange.location.as_ref().expect("The handler should set a location.");

	assert_eq!(location, &redirect.url);
	assert_eq!(location.path(), "/authorize");
	assert!(exchange.body.is_none());
}

#[tokio::test]
async fn login_route_answers_misconfiguration_with_a_generic_500() {
	let server = MockServer::start_async().await;
	let mut authenticator =
		build_test_authenticator(&server.url("/authorize"), &server.url("/token"));

	authenticator.config.client_id = None;

	let mut exchange = RecordedExchange::default();

	assert!(auth::login(&authenticator, &mut exchange).is_none());
	assert_eq!(exchange.effective_status(), 500);
	assert_eq!(exchange.location, None);
	assert_eq!(
		exchange.body,
		Some(json!({ "error": "Authentication is not configured." })),
		"Misconfiguration details must not reach the client.",
	);
}

#[tokio::test]
async fn callback_route_answers_a_missing_code_with_a_400() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server.url("/authorize"), &server.url("/token"));
	let mut exchange = RecordedExchange::default();

	assert!(auth::callback(&authenticator, &mut exchange).await.is_none());
	assert_eq!(exchange.effective_status(), 400);
	assert_eq!(exchange.body, Some(json!({ "error": "Missing authorization code." })));
}

#[tokio::test]
async fn callback_route_exchanges_the_code_and_redirects_home() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token").query_param("code", "valid-code");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"abc123\"}");
		})
		.await;
	let authenticator = build_test_authenticator(&server.url("/authorize"), &server.url("/token"));
	let mut exchange = RecordedExchange::with_params([("code", "valid-code")]);
	let completed = auth::callback(&authenticator, &mut exchange)
		.await
		.expect("A valid code should complete the login.");

	mock.assert_async().await;

	assert_eq!(completed.access_token.expose(), "abc123");
	assert_eq!(exchange.location.as_ref().map(Url::as_str), Some(TEST_POST_LOGIN_URL));
	assert!(exchange.body.is_none());
}

#[tokio::test]
async fn callback_route_answers_a_rejected_exchange_with_a_502() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"code expired\"}");
		})
		.await;
	let authenticator = build_test_authenticator(&server.url("/authorize"), &server.url("/token"));
	let mut exchange = RecordedExchange::with_params([("code", "stale-code")]);

	assert!(auth::callback(&authenticator, &mut exchange).await.is_none());
	assert_eq!(exchange.effective_status(), 502);

	let body = exchange.body.expect("The handler should write an error body.").to_string();

	assert!(body.contains("Token exchange failed."));
	assert!(!body.contains("invalid_grant"), "Provider error codes stay out of client bodies.");
	assert!(!body.contains("code expired"), "Provider responses stay out of client bodies.");
}

#[tokio::test]
async fn user_routes_serve_the_store_contents() {
	let store = MemoryUserStore::default();
	let created = store.create("alice").await.expect("Creating the user fixture should succeed.");
	let mut exchange = RecordedExchange::default();

	users::list_users(&store, &mut exchange).await;

	assert_eq!(exchange.effective_status(), 200);
	assert_eq!(exchange.body, Some(json!([{ "id": created.id, "username": "alice" }])));

	let mut exchange = RecordedExchange::default();

	users::get_user(&store, created.id, &mut exchange).await;

	assert_eq!(exchange.body, Some(json!({ "id": created.id, "username": "alice" })));
}

#[tokio::test]
async fn user_routes_answer_missing_records_with_the_expected_message() {
	let store = MemoryUserStore::default();
	let mut exchange = RecordedExchange::default();

	users::get_user(&store, 42, &mut exchange).await;

	assert_eq!(exchange.effective_status(), 404);
	assert_eq!(exchange.body, Some(json!({ "message": "User not found" })));

	let mut exchange = RecordedExchange::default();
	let payload = UpdateUser { username: "nobody".into() };

	users::update_user(&store, 42, &payload, &mut exchange).await;

	assert_eq!(exchange.effective_status(), 404);
	assert_eq!(exchange.body, Some(json!({ "message": "User not found" })));

	let mut exchange = RecordedExchange::default();

	users::delete_user(&store, 42, &mut exchange).await;

	assert_eq!(exchange.effective_status(), 404);
	assert_eq!(exchange.body, Some(json!({ "message": "User not found" })));
}

#[tokio::test]
async fn user_update_and_delete_report_success_bodies() {
	let store = MemoryUserStore::default();
	let created = store.create("alice").await.expect("Creating the user fixture should succeed.");
	let mut exchange = RecordedExchange::default();
	let payload = UpdateUser { username: "alicia".into() };

	users::update_user(&store, created.id, &payload, &mut exchange).await;

	assert_eq!(exchange.effective_status(), 200);
	assert_eq!(exchange.body, Some(json!({ "id": created.id, "username": "alicia" })));

	let mut exchange = RecordedExchange::default();

	users::delete_user(&store, created.id, &mut exchange).await;

	assert_eq!(exchange.effective_status(), 200);
	assert_eq!(exchange.body, Some(json!({ "message": "User deleted successfully" })));
}

#[tokio::test]
async fn user_routes_answer_store_failures_with_a_generic_500() {
	let store = FailingUserStore;
	let mut exchange = RecordedExchange::default();

	users::list_users(&store, &mut exchange).await;

	assert_eq!(exchange.effective_status(), 500);
	assert_eq!(exchange.body, Some(json!({ "message": "Internal Server Error" })));

	let mut exchange = RecordedExchange::default();

	users::delete_user(&store, 1, &mut exchange).await;

	assert_eq!(exchange.effective_status(), 500);

	let body = exchange.body.expect("The handler should write an error body.").to_string();

	assert!(!body.contains("connection refused"), "Backend details stay out of client bodies.");
}
