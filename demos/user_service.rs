//! Drives the user CRUD handlers against the in-memory store with a stdout-backed
//! request/response adapter, the way an embedding HTTP server would.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use studybuddy_auth::{
	store::{MemoryUserStore, UserStore},
	web::{HttpExchange, users, users::UpdateUser},
};

#[derive(Default)]
struct PrintExchange {
	status: Option<u16>,
}
impl HttpExchange for PrintExchange {
	fn query_param(&self, _name: &str) -> Option<String> {
		None
	}

	fn redirect(&mut self, location: &Url) {
		println!("302 -> {location}");
	}

	fn set_status(&mut self, status: u16) {
		self.status = Some(status);
	}

	fn write_json(&mut self, body: serde_json::Value) {
		println!("{} {body}", self.status.unwrap_or(200));
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let store = MemoryUserStore::default();
	let alice = store.create("alice").await?;
	let _bob = store.create("bob").await?;

	println!("GET /user");
	users::list_users(&store, &mut PrintExchange::default()).await;

	println!("GET /user/{}", alice.id);
	users::get_user(&store, alice.id, &mut PrintExchange::default()).await;

	println!("PUT /user/{}", alice.id);
	users::update_user(
		&store,
		alice.id,
		&UpdateUser { username: "alicia".into() },
		&mut PrintExchange::default(),
	)
	.await;

	println!("DELETE /user/{}", alice.id);
	users::delete_user(&store, alice.id, &mut PrintExchange::default()).await;

	println!("GET /user/{}", alice.id);
	users::get_user(&store, alice.id, &mut PrintExchange::default()).await;

	Ok(())
}
