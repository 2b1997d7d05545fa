//! Authentication domain primitives: validated identifiers and redacted secrets.

pub mod id;
pub mod token;

pub use id::*;
pub use token::*;
