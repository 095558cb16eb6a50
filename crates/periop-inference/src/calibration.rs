//! Logistic calibration of decision scores.

use periop_core::models::PredictionResult;

/// Positive-class probability `1 / (1 + e^-score)`.
///
/// Evaluated in the form that never exponentiates a positive number.
pub fn to_probability(score: f64) -> f64 {
    if score >= 0.0 {
        1.0 / (1.0 + (-score).exp())
    } else {
        let ez = score.exp();
        ez / (1.0 + ez)
    }
}

/// Probability mass of the more likely class.
pub fn confidence(positive_probability: f64) -> f64 {
    positive_probability.max(1.0 - positive_probability)
}

/// Class, probability, and confidence for a decision score.
pub fn calibrate(score: f64) -> PredictionResult {
    PredictionResult::new(score, to_probability(score))
}
