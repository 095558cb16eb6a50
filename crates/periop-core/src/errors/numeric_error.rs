//! Per-record arithmetic failures.

use super::error_code::{self, PeriopErrorCode};

/// Finite inputs whose standardized values or decision score left the
/// finite range. Fatal for a single-record request, contained per row
/// inside a batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    #[error("feature '{feature}' value {value} standardizes to a non-finite number")]
    Standardized { feature: String, value: f64 },

    #[error("decision score is not finite")]
    Score,
}

impl PeriopErrorCode for NumericError {
    fn error_code(&self) -> &'static str {
        error_code::NUMERIC_OVERFLOW
    }
}
