//! Provider-facing configuration (data) and the registry resolving it by name.
//!
//! `config` exposes the per-provider OAuth settings (`ProviderConfig`) together with
//! a builder, environment loading, and the completeness validation every flow runs
//! before touching the network. `registry` maps provider names to configurations;
//! it is built once at startup and read-only thereafter.

pub mod config;
pub mod registry;

pub use config::*;
pub use registry::*;
