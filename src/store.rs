//! Persistence contract for the user collaborator plus the built-in memory backend.
//!
//! The login core treats user persistence as an external collaborator: the trait
//! below is the whole coupling surface, and the crate ships only an in-process
//! implementation for tests and demos. Database-backed implementations live with the
//! embedding application.

pub mod memory;

pub use memory::MemoryUserStore;

// self
use crate::_prelude::*;

/// Future returned by [`UserStore`] implementations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Study Buddy user record owned by the persistence collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	/// Surrogate primary key.
	pub id: i64,
	/// Unique display name.
	pub username: String,
}

/// Storage backend contract for user records.
pub trait UserStore
where
	Self: Send + Sync,
{
	/// Lists every stored user.
	fn list(&self) -> StoreFuture<'_, Vec<User>>;

	/// Fetches the user with the provided id, if present.
	fn find(&self, id: i64) -> StoreFuture<'_, Option<User>>;

	/// Fetches the user with the provided username, if present.
	fn find_by_username<'a>(&'a self, username: &'a str) -> StoreFuture<'a, Option<User>>;

	/// Creates a new user with the provided username.
	fn create<'a>(&'a self, username: &'a str) -> StoreFuture<'a, User>;

	/// Replaces the username of an existing user, returning the updated record.
	fn update_username<'a>(&'a self, id: i64, username: &'a str)
	-> StoreFuture<'a, Option<User>>;

	/// Deletes the user with the provided id, reporting whether a record existed.
	fn delete(&self, id: i64) -> StoreFuture<'_, bool>;
}

/// Error type produced by [`UserStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
