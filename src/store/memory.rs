//! Thread-safe in-memory [`UserStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	store::{StoreFuture, User, UserStore},
};

#[derive(Debug, Default)]
struct UserTable {
	users: BTreeMap<i64, User>,
	next_id: i64,
}

type SharedTable = Arc<RwLock<UserTable>>;

/// Thread-safe storage backend that keeps user records in-process.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore(SharedTable);
impl MemoryUserStore {
	fn list_now(table: SharedTable) -> Vec<User> {
		table.read().users.values().cloned().collect()
	}

	fn find_now(table: SharedTable, id: i64) -> Option<User> {
		table.read().users.get(&id).cloned()
	}

	fn find_by_username_now(table: SharedTable, username: &str) -> Option<User> {
		table.read().users.values().find(|user| user.username == username).cloned()
	}

	fn create_now(table: SharedTable, username: &str) -> User {
		let mut guard = table.write();

		guard.next_id += 1;

		let user = User { id: guard.next_id, username: username.to_owned() };

		guard.users.insert(user.id, user.clone());

		user
	}

	fn update_username_now(table: SharedTable, id: i64, username: &str) -> Option<User> {
		let mut guard = table.write();

		match guard.users.get_mut(&id) {
			Some(user) => {
				user.username = username.to_owned();

				Some(user.clone())
			},
			None => None,
		}
	}

	fn delete_now(table: SharedTable, id: i64) -> bool {
		table.write().users.remove(&id).is_some()
	}
}
impl UserStore for MemoryUserStore {
	fn list(&self) -> StoreFuture<'_, Vec<User>> {
		let table = self.0.clone();

		Box::pin(async move { Ok(Self::list_now(table)) })
	}

	fn find(&self, id: i64) -> StoreFuture<'_, Option<User>> {
		let table = self.0.clone();

		Box::pin(async move { Ok(Self::find_now(table, id)) })
	}

	fn find_by_username<'a>(&'a self, username: &'a str) -> StoreFuture<'a, Option<User>> {
		let table = self.0.clone();

		Box::pin(async move { Ok(Self::find_by_username_now(table, username)) })
	}

	fn create<'a>(&'a self, username: &'a str) -> StoreFuture<'a, User> {
		let table = self.0.clone();

		Box::pin(async move { Ok(Self::create_now(table, username)) })
	}

	fn update_username<'a>(
		&'a self,
		id: i64,
		username: &'a str,
	) -> StoreFuture<'a, Option<User>> {
		let table = self.0.clone();

		Box::pin(async move { Ok(Self::update_username_now(table, id, username)) })
	}

	fn delete(&self, id: i64) -> StoreFuture<'_, bool> {
		let table = self.0.clone();

		Box::pin(async move { Ok(Self::delete_now(table, id)) })
	}
}
