//! Structural mismatches between the model schema and supplied data.

use super::error_code::{self, PeriopErrorCode};

/// Structural defects. These apply to every row and abort the whole request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl SchemaError {
    /// Names of the missing columns, empty for length mismatches.
    pub fn missing_columns(&self) -> &[String] {
        match self {
            Self::MissingColumns { columns } => columns,
            Self::LengthMismatch { .. } => &[],
        }
    }
}

impl PeriopErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_MISMATCH
    }
}
