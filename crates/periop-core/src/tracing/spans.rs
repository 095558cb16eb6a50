//! Span definitions per operation: single prediction and batch runs.

/// Create a single-record prediction span.
#[macro_export]
macro_rules! predict_span {
    ($model_id:expr) => {
        ::tracing::debug_span!("periop.predict", model_id = %$model_id)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($model_id:expr, $rows:expr) => {
        ::tracing::info_span!("periop.batch", model_id = %$model_id, rows = ?$rows)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICT: &str = "periop.predict";
    pub const BATCH: &str = "periop.batch";
}
