use crate::errors::PeriopResult;
use crate::models::{BatchEntry, PredictionResult, Record};

/// Record-level prediction over a loaded model.
pub trait IPredictor: Send + Sync {
    /// Score one record. Any conversion failure fails the call.
    fn predict_one(&self, record: &Record) -> PeriopResult<PredictionResult>;

    /// Score a batch. Row failures are reported in-band; only structural
    /// defects fail the whole call.
    fn predict_batch(&self, records: &[Record]) -> PeriopResult<Vec<BatchEntry>>;
}
