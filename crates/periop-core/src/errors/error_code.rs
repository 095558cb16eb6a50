//! PeriopErrorCode trait for the service boundary.

/// Stable error codes handed to the I/O layer.
/// Every error enum implements this so callers can map failures
/// to response statuses without matching on message text.
pub trait PeriopErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the service boundary.
pub const MODEL_NOT_LOADED: &str = "MODEL_NOT_LOADED";
pub const MODEL_LOAD_ERROR: &str = "MODEL_LOAD_ERROR";
pub const FEATURE_CONVERSION_ERROR: &str = "FEATURE_CONVERSION_ERROR";
pub const NUMERIC_OVERFLOW: &str = "NUMERIC_OVERFLOW";
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
