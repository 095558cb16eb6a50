//! Structured log events for key inference operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a successful model load.
pub fn model_loaded(model_id: &str, origin: &str, features: usize) {
    ::tracing::info!(
        event = "model_loaded",
        model_id = %model_id,
        origin = %origin,
        features = features,
        "model loaded"
    );
}

/// Log substitution of the documented default parameters.
pub fn degraded_mode(reason: &str) {
    ::tracing::warn!(
        event = "degraded_mode",
        reason = %reason,
        "model load failed, serving default parameters"
    );
}

/// Log a model load failure with no fallback.
pub fn model_load_failed(origin: &str, reason: &str) {
    ::tracing::error!(
        event = "model_load_failed",
        origin = %origin,
        reason = %reason,
        "model load failed"
    );
}

/// Log a batch rejected before scoring.
pub fn schema_rejected(missing: &[String]) {
    ::tracing::warn!(
        event = "schema_rejected",
        missing = ?missing,
        "batch rejected: missing required columns"
    );
}

/// Log a single failed batch row.
pub fn row_failed(row: usize, error: &str) {
    ::tracing::warn!(
        event = "row_failed",
        row = row,
        error = %error,
        "batch row failed"
    );
}

/// Log batch completion.
pub fn batch_completed(total: usize, succeeded: usize, failed: usize) {
    ::tracing::info!(
        event = "batch_completed",
        total = total,
        succeeded = succeeded,
        failed = failed,
        "batch completed"
    );
}
