//! # periop-core
//!
//! Foundation crate for the Periop inference engine.
//! Defines the record and result types, traits, errors, config, tracing, and constants.
//! `periop-inference` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::PeriopConfig;
pub use errors::{PeriopError, PeriopResult};
pub use models::{BatchEntry, Outcome, PredictionResult, RawValue, Record};
pub use traits::IPredictor;
