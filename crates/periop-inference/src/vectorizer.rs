//! Record → schema-ordered numeric vector.

use std::ops::Deref;

use periop_core::errors::FeatureConversionError;
use periop_core::models::Record;

use crate::schema::FeatureSchema;

/// Numeric vector whose index `i` corresponds to schema feature `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for FeatureVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Build the vector for a single-record request.
pub fn build(record: &Record, schema: &FeatureSchema) -> Result<FeatureVector, FeatureConversionError> {
    build_row(record, schema, None)
}

/// Build the vector, tagging conversion errors with the 1-indexed `row`.
///
/// Absent and empty fields become 0.0.
pub fn build_row(
    record: &Record,
    schema: &FeatureSchema,
    row: Option<usize>,
) -> Result<FeatureVector, FeatureConversionError> {
    schema
        .iter()
        .map(|feature| match record.get(feature) {
            Some(raw) => raw.coerce(feature, row),
            None => Ok(0.0),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(FeatureVector)
}
