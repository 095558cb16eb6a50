//! Batch scoring: materialized slices, lazy streams, optional rayon fan-out.
//!
//! Every row produces exactly one [`BatchEntry`](periop_core::models::BatchEntry)
//! in input order. Only a structural column defect rejects the whole batch.

mod columns;
mod runner;
mod stream;

pub use columns::{check_columns, check_records};
pub use runner::BatchRunner;
pub use stream::{BatchStream, TabularRows};
