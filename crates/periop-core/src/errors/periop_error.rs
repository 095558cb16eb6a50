//! Top-level error aggregating every subsystem.

use super::error_code::PeriopErrorCode;
use super::{ConfigError, FeatureConversionError, ModelError, NumericError, SchemaError};

/// Errors surfaced by the public inference operations.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PeriopError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Feature conversion error: {0}")]
    FeatureConversion(#[from] FeatureConversionError),

    #[error("Numeric overflow: {0}")]
    Numeric(#[from] NumericError),

    #[error("Schema mismatch: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type PeriopResult<T> = Result<T, PeriopError>;

impl PeriopErrorCode for PeriopError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            Self::FeatureConversion(e) => e.error_code(),
            Self::Numeric(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
