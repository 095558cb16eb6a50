//! Immutable, shareable bundle of everything inference reads.

use std::sync::Arc;

use periop_core::constants::{MODEL_KIND, SELECTED_FEATURE_PREVIEW};
use periop_core::errors::{ModelError, PeriopResult};
use periop_core::models::{ModelInfo, ModelProvenance, PredictionResult, Record};

use crate::artifact::ModelArtifact;
use crate::params::{LinearModel, StandardizationParams};
use crate::pipeline;
use crate::schema::FeatureSchema;

const UNNAMED_MODEL_ID: &str = "unnamed";
const UNVERSIONED_MODEL: &str = "0.0.0";

/// A loaded model. Cloning is an `Arc` bump; nothing inside ever changes.
#[derive(Debug, Clone)]
pub struct ModelHandle {
    inner: Arc<ModelInner>,
}

#[derive(Debug)]
struct ModelInner {
    schema: FeatureSchema,
    standardization: StandardizationParams,
    model: LinearModel,
    /// Kept as read so an export reproduces the artifact it came from.
    model_id: Option<String>,
    model_version: Option<String>,
    provenance: ModelProvenance,
}

impl ModelHandle {
    /// Validate an artifact and freeze it into a handle.
    pub fn from_artifact(
        artifact: ModelArtifact,
        provenance: ModelProvenance,
    ) -> Result<Self, ModelError> {
        let ModelArtifact {
            feature_order,
            weights,
            intercept,
            center,
            scale,
            model_id,
            model_version,
        } = artifact;

        let schema = FeatureSchema::new(feature_order)?;
        let standardization = StandardizationParams::new(schema.names(), center, scale)?;
        let model = LinearModel::new(schema.len(), weights, intercept)?;

        Ok(Self {
            inner: Arc::new(ModelInner {
                schema,
                standardization,
                model,
                model_id,
                model_version,
                provenance,
            }),
        })
    }

    /// The documented default parameters, explicitly chosen.
    pub fn builtin() -> Result<Self, ModelError> {
        Self::from_artifact(ModelArtifact::defaults(), ModelProvenance::Builtin)
    }

    /// The documented default parameters substituted after a failed load.
    /// The handle reports itself as degraded with `reason`.
    pub fn fallback(reason: impl Into<String>) -> Result<Self, ModelError> {
        Self::from_artifact(
            ModelArtifact::defaults(),
            ModelProvenance::Defaults {
                reason: reason.into(),
            },
        )
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.inner.schema
    }

    pub fn standardization(&self) -> &StandardizationParams {
        &self.inner.standardization
    }

    pub fn model(&self) -> &LinearModel {
        &self.inner.model
    }

    /// Artifact `modelId`, or `"unnamed"` when it carried none.
    pub fn model_id(&self) -> &str {
        self.inner.model_id.as_deref().unwrap_or(UNNAMED_MODEL_ID)
    }

    /// Artifact `modelVersion`, or `"0.0.0"` when it carried none.
    pub fn model_version(&self) -> &str {
        self.inner.model_version.as_deref().unwrap_or(UNVERSIONED_MODEL)
    }

    pub fn provenance(&self) -> &ModelProvenance {
        &self.inner.provenance
    }

    pub fn is_degraded(&self) -> bool {
        self.inner.provenance.is_degraded()
    }

    /// Score one record against this model.
    pub fn predict(&self, record: &Record) -> PeriopResult<PredictionResult> {
        pipeline::predict_record(self, record, None)
    }

    /// Export the parameters in the persisted format.
    pub fn to_artifact(&self) -> ModelArtifact {
        ModelArtifact {
            feature_order: self.inner.schema.names().to_vec(),
            weights: self.inner.model.weights().to_vec(),
            intercept: self.inner.model.intercept(),
            center: self.inner.standardization.center().to_vec(),
            scale: self.inner.standardization.scale().to_vec(),
            model_id: self.inner.model_id.clone(),
            model_version: self.inner.model_version.clone(),
        }
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            model_type: MODEL_KIND,
            model_id: self.model_id().to_string(),
            model_version: self.model_version().to_string(),
            features_count: self.inner.schema.len(),
            selected_features: self
                .inner
                .schema
                .names()
                .iter()
                .take(SELECTED_FEATURE_PREVIEW)
                .cloned()
                .collect(),
            provenance: self.inner.provenance.clone(),
            degraded: self.is_degraded(),
        }
    }

    /// True when both handles share the same loaded parameters.
    pub fn ptr_eq(&self, other: &ModelHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
