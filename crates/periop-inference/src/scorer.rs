//! Linear-kernel decision function.

use periop_core::errors::{NumericError, PeriopResult, SchemaError};

use crate::params::LinearModel;
use crate::schema::FeatureSchema;
use crate::vectorizer::FeatureVector;

/// `Σ vector[i] · weights[i] + intercept`.
///
/// The sign decides the class; see `Outcome::from_score` for the tie rule.
/// A sum that overflows is rejected rather than calibrated.
pub fn score(vector: &FeatureVector, model: &LinearModel) -> PeriopResult<f64> {
    check_len(vector, model)?;
    let score = dot(vector, model.weights()) + model.intercept();
    if score.is_finite() {
        Ok(score)
    } else {
        Err(NumericError::Score.into())
    }
}

/// Per-feature terms `weights[i] · vector[i]`, largest magnitude first,
/// truncated to `top_k`. Zero terms are dropped.
pub fn contributions(
    vector: &FeatureVector,
    model: &LinearModel,
    schema: &FeatureSchema,
    top_k: usize,
) -> Result<Vec<(String, f64)>, SchemaError> {
    check_len(vector, model)?;
    let mut terms: Vec<(String, f64)> = schema
        .iter()
        .zip(vector.iter().zip(model.weights()))
        .map(|(name, (x, w))| (name.to_string(), x * w))
        .filter(|(_, c)| *c != 0.0)
        .collect();
    terms.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    terms.truncate(top_k);
    Ok(terms)
}

fn check_len(vector: &FeatureVector, model: &LinearModel) -> Result<(), SchemaError> {
    if vector.len() == model.weights().len() {
        Ok(())
    } else {
        Err(SchemaError::LengthMismatch {
            expected: model.weights().len(),
            actual: vector.len(),
        })
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(ai, bi)| ai * bi).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_combination() {
        let model = LinearModel::new(2, vec![1.0, -1.0], 0.5).unwrap();
        assert_eq!(score(&vec![3.0, 1.0].into(), &model).unwrap(), 2.5);
    }

    #[test]
    fn contributions_rank_by_magnitude() {
        let schema = FeatureSchema::new(["a", "b", "c"]).unwrap();
        let model = LinearModel::new(3, vec![0.5, -2.0, 1.0], 0.0).unwrap();
        let terms = contributions(&vec![2.0, 1.0, 0.0].into(), &model, &schema, 5).unwrap();
        assert_eq!(terms, vec![("b".to_string(), -2.0), ("a".to_string(), 1.0)]);
    }

    #[test]
    fn mismatched_vector_is_rejected() {
        let model = LinearModel::new(2, vec![1.0, 1.0], 0.0).unwrap();
        assert!(score(&vec![1.0, 2.0, 3.0].into(), &model).is_err());
    }

    #[test]
    fn overflowing_sum_is_rejected() {
        let model = LinearModel::new(2, vec![1.0, 1.0], 0.0).unwrap();
        let err = score(&vec![1.7e308, 1.7e308].into(), &model).unwrap_err();
        assert!(matches!(
            err,
            periop_core::errors::PeriopError::Numeric(NumericError::Score)
        ));
    }
}
