use serde::{Serialize, Serializer};

use crate::constants::{NEGATIVE_LABEL, POSITIVE_LABEL};

/// Predicted class. Positive is class 1, negative is class 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Negative,
    Positive,
}

impl Outcome {
    /// Positive iff `score > 0`. A score of exactly zero is negative.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn as_int(self) -> u8 {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Negative => NEGATIVE_LABEL,
            Self::Positive => POSITIVE_LABEL,
        }
    }
}

/// Result of scoring one record.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub outcome: Outcome,
    /// Raw decision score before calibration.
    pub score: f64,
    /// Probability of the positive class, in [0, 1].
    pub positive_probability: f64,
    /// Probability mass of the predicted class: `max(p, 1 - p)`.
    pub confidence: f64,
}

impl PredictionResult {
    /// Assemble a result from a decision score and its calibrated probability.
    pub fn new(score: f64, positive_probability: f64) -> Self {
        Self {
            outcome: Outcome::from_score(score),
            score,
            positive_probability,
            confidence: positive_probability.max(1.0 - positive_probability),
        }
    }

    pub fn predicted_class(&self) -> u8 {
        self.outcome.as_int()
    }

    pub fn negative_probability(&self) -> f64 {
        1.0 - self.positive_probability
    }
}

#[derive(Serialize)]
pub(crate) struct WireProbabilities {
    negative: f64,
    positive: f64,
}

/// Response shape expected by the service layer.
#[derive(Serialize)]
pub(crate) struct WireResult {
    prediction: u8,
    prediction_label: &'static str,
    confidence: f64,
    probabilities: WireProbabilities,
}

impl From<&PredictionResult> for WireResult {
    fn from(result: &PredictionResult) -> Self {
        Self {
            prediction: result.predicted_class(),
            prediction_label: result.outcome.label(),
            confidence: result.confidence,
            probabilities: WireProbabilities {
                negative: result.negative_probability(),
                positive: result.positive_probability,
            },
        }
    }
}

impl Serialize for PredictionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireResult::from(self).serialize(serializer)
    }
}
