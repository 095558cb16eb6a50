//! Per-record feature conversion errors.

use super::error_code::{self, PeriopErrorCode};

/// A field was present but its raw value is not numeric.
///
/// Fatal for a single-record request, contained per row inside a batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}feature '{feature}' has non-numeric value '{value}'", row_prefix(.row))]
pub struct FeatureConversionError {
    /// Schema feature whose value failed to convert.
    pub feature: String,
    /// 1-indexed batch row, `None` for single-record requests.
    pub row: Option<usize>,
    /// The offending raw value as received.
    pub value: String,
}

impl FeatureConversionError {
    pub fn new(feature: impl Into<String>, row: Option<usize>, value: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            row,
            value: value.into(),
        }
    }
}

fn row_prefix(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!("row {row}: "),
        None => String::new(),
    }
}

impl PeriopErrorCode for FeatureConversionError {
    fn error_code(&self) -> &'static str {
        error_code::FEATURE_CONVERSION_ERROR
    }
}
