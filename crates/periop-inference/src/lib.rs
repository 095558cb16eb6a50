//! # periop-inference
//!
//! Point-of-care inference over a fitted linear classifier.
//!
//! ## Pipeline
//!
//! | Stage | Input → Output |
//! |-------|----------------|
//! | Vectorizer | named-field record → schema-ordered vector (missing → 0.0) |
//! | Standardizer | vector → `(x - center) / scale` |
//! | Scorer | standardized vector → `w · x + b` |
//! | Calibration | score → logistic probability, class, confidence |
//!
//! Batches run the pipeline per row. A bad row becomes a row-tagged failure;
//! only a missing schema column rejects the whole batch.
//!
//! ## Model lifecycle
//!
//! A [`ModelHandle`] is immutable and shared by `Arc`. [`ModelRegistry`]
//! loads it at most once, optionally substituting the documented default
//! parameters (degraded mode) when the source cannot be loaded.

pub mod artifact;
pub mod batch;
pub mod calibration;
pub mod defaults;
pub mod engine;
pub mod handle;
pub mod loader;
pub mod params;
pub mod pipeline;
pub mod registry;
pub mod schema;
pub mod scorer;
pub mod standardizer;
pub mod template;
pub mod vectorizer;

pub use artifact::ModelArtifact;
pub use batch::{BatchRunner, BatchStream};
pub use engine::InferenceEngine;
pub use handle::ModelHandle;
pub use loader::{load_model, load_model_or_defaults, ModelSource};
pub use params::{LinearModel, StandardizationParams};
pub use registry::ModelRegistry;
pub use schema::FeatureSchema;
pub use vectorizer::FeatureVector;
