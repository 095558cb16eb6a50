//! Model loading and availability errors.

use super::error_code::{self, PeriopErrorCode};

/// Errors raised while loading or accessing a model.
///
/// Everything except `NotLoaded` is a load-time failure: the source was
/// missing, unreadable, malformed, or structurally invalid.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model not loaded: {reason}")]
    NotLoaded { reason: String },

    #[error("model file not found: {path}")]
    FileNotFound { path: String },

    #[error("model read failed: {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("model parse failed in {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("model schema is empty")]
    EmptySchema,

    #[error("blank feature name at index {index}")]
    BlankFeature { index: usize },

    #[error("duplicate feature in schema: {feature}")]
    DuplicateFeature { feature: String },

    #[error("{field} length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("scale is zero for feature {feature} (index {index})")]
    ZeroScale { index: usize, feature: String },

    #[error("non-finite {field} at index {index}: {value}")]
    NonFinite {
        field: &'static str,
        index: usize,
        value: f64,
    },
}

impl ModelError {
    pub fn not_loaded(reason: impl Into<String>) -> Self {
        Self::NotLoaded {
            reason: reason.into(),
        }
    }

    /// True for failures raised while loading a source.
    pub fn is_load_failure(&self) -> bool {
        !matches!(self, Self::NotLoaded { .. })
    }
}

impl PeriopErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotLoaded { .. } => error_code::MODEL_NOT_LOADED,
            _ => error_code::MODEL_LOAD_ERROR,
        }
    }
}
