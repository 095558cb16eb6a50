//! Fixed per-feature centering and scaling.

use periop_core::errors::{NumericError, PeriopResult, SchemaError};

use crate::params::StandardizationParams;
use crate::vectorizer::FeatureVector;

/// `result[i] = (vector[i] - center[i]) / scale[i]`.
///
/// Scales are validated non-zero at load. Fails on a vector built against
/// a different schema, or when a finite value overflows once scaled.
pub fn standardize(
    vector: &FeatureVector,
    params: &StandardizationParams,
) -> PeriopResult<FeatureVector> {
    if vector.len() != params.len() {
        return Err(SchemaError::LengthMismatch {
            expected: params.len(),
            actual: vector.len(),
        }
        .into());
    }
    let standardized = vector
        .iter()
        .zip(params.center())
        .zip(params.scale())
        .map(|((value, center), scale)| (value - center) / scale)
        .collect::<Vec<_>>();

    if let Some(index) = standardized.iter().position(|v| !v.is_finite()) {
        return Err(NumericError::Standardized {
            feature: params.features()[index].clone(),
            value: vector[index],
        }
        .into());
    }
    Ok(standardized.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use periop_core::errors::PeriopError;

    fn params() -> StandardizationParams {
        let names = vec!["a".to_string(), "b".to_string()];
        StandardizationParams::new(&names, vec![1.0, 10.0], vec![2.0, 5.0]).unwrap()
    }

    #[test]
    fn centers_and_scales() {
        let out = standardize(&vec![3.0, 0.0].into(), &params()).unwrap();
        assert_eq!(&*out, &[1.0, -2.0]);
    }

    #[test]
    fn length_mismatch_is_a_schema_error() {
        let err = standardize(&vec![1.0].into(), &params()).unwrap_err();
        assert!(matches!(
            err,
            PeriopError::Schema(SchemaError::LengthMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn overflow_names_the_feature() {
        let names = vec!["a".to_string(), "b".to_string()];
        let tight = StandardizationParams::new(&names, vec![0.0, 0.0], vec![1.0, 0.01]).unwrap();
        let err = standardize(&vec![1.0, 1e308].into(), &tight).unwrap_err();
        match err {
            PeriopError::Numeric(NumericError::Standardized { feature, value }) => {
                assert_eq!(feature, "b");
                assert_eq!(value, 1e308);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
