//! Fitted parameters: per-feature standardization and the linear decision function.

use periop_core::errors::ModelError;

/// Per-feature center and scale. Every scale is finite and non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardizationParams {
    features: Vec<String>,
    center: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardizationParams {
    /// Validate against a schema of `features` names. A zero scale is a
    /// configuration error caught here, never a per-record error.
    pub fn new(features: &[String], center: Vec<f64>, scale: Vec<f64>) -> Result<Self, ModelError> {
        check_len("center", features.len(), center.len())?;
        check_len("scale", features.len(), scale.len())?;
        check_finite("center", &center)?;
        check_finite("scale", &scale)?;
        if let Some(index) = scale.iter().position(|s| *s == 0.0) {
            return Err(ModelError::ZeroScale {
                index,
                feature: features[index].clone(),
            });
        }
        Ok(Self {
            features: features.to_vec(),
            center,
            scale,
        })
    }

    /// Feature names in schema order, used to label overflow errors.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn center(&self) -> &[f64] {
        &self.center
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    pub fn len(&self) -> usize {
        self.center.len()
    }

    pub fn is_empty(&self) -> bool {
        self.center.is_empty()
    }
}

/// Linear decision function `w · x + b`. Positive class is 1, negative is 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(feature_count: usize, weights: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        check_len("weights", feature_count, weights.len())?;
        check_finite("weights", &weights)?;
        if !intercept.is_finite() {
            return Err(ModelError::NonFinite {
                field: "intercept",
                index: 0,
                value: intercept,
            });
        }
        Ok(Self { weights, intercept })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), ModelError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ModelError::DimensionMismatch {
            field,
            expected,
            actual,
        })
    }
}

fn check_finite(field: &'static str, values: &[f64]) -> Result<(), ModelError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ModelError::NonFinite {
            field,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
