//! Observability for Periop.
//! `tracing` crate with `EnvFilter`, structured events, and span definitions.

pub mod events;
pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_from_config};
