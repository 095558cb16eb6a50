//! The per-record pipeline: vectorize → standardize → score → calibrate.

use periop_core::errors::PeriopResult;
use periop_core::models::{PredictionResult, Record};

use crate::handle::ModelHandle;
use crate::{calibration, scorer, standardizer, vectorizer};

/// Run one record through the full pipeline.
///
/// `row` is the 1-indexed batch row, carried into conversion errors.
/// Pure: no I/O, no shared mutable state.
pub fn predict_record(
    handle: &ModelHandle,
    record: &Record,
    row: Option<usize>,
) -> PeriopResult<PredictionResult> {
    let raw = vectorizer::build_row(record, handle.schema(), row)?;
    let standardized = standardizer::standardize(&raw, handle.standardization())?;
    let score = scorer::score(&standardized, handle.model())?;
    Ok(calibration::calibrate(score))
}

/// Top `top_k` standardized feature contributions to the decision score.
pub fn explain_record(
    handle: &ModelHandle,
    record: &Record,
    top_k: usize,
) -> PeriopResult<Vec<(String, f64)>> {
    let raw = vectorizer::build(record, handle.schema())?;
    let standardized = standardizer::standardize(&raw, handle.standardization())?;
    Ok(scorer::contributions(
        &standardized,
        handle.model(),
        handle.schema(),
        top_k,
    )?)
}
