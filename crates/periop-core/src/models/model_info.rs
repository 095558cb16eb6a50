use serde::Serialize;

use crate::constants::{CATEGORICAL_FEATURES, NUMERICAL_FEATURES};

use super::{RawValue, Record};

/// Where a loaded model's parameters came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelProvenance {
    /// Parsed from an artifact (file path or `<inline>`).
    Source { origin: String },
    /// Built-in default parameters, explicitly requested.
    Builtin,
    /// Documented default parameters substituted after a failed load.
    Defaults { reason: String },
}

impl ModelProvenance {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Defaults { .. })
    }
}

/// Read-only description of the active model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub model_type: &'static str,
    pub model_id: String,
    pub model_version: String,
    pub features_count: usize,
    /// Leading schema features, truncated for display.
    pub selected_features: Vec<String>,
    pub provenance: ModelProvenance,
    pub degraded: bool,
}

/// Liveness snapshot for the service health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub model_loaded: bool,
    pub degraded: bool,
    pub version: &'static str,
}

/// The full clinical feature inventory the models are drawn from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCatalog {
    pub categorical_features: Vec<String>,
    pub numerical_features: Vec<String>,
}

impl FeatureCatalog {
    /// Categorical features first, then numerical, in declaration order.
    pub fn all_features(&self) -> Vec<String> {
        self.categorical_features
            .iter()
            .chain(&self.numerical_features)
            .cloned()
            .collect()
    }

    pub fn is_categorical(&self, feature: &str) -> bool {
        self.categorical_features.iter().any(|f| f == feature)
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self {
            categorical_features: CATEGORICAL_FEATURES.iter().map(|s| s.to_string()).collect(),
            numerical_features: NUMERICAL_FEATURES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Blank input template: the schema columns plus one example row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateRow {
    pub columns: Vec<String>,
    pub example: Vec<f64>,
}

impl TemplateRow {
    /// The example row as a record, ready to score.
    pub fn example_record(&self) -> Record {
        self.columns
            .iter()
            .zip(&self.example)
            .map(|(column, value)| (column.clone(), RawValue::Numeric(*value)))
            .collect()
    }
}
