//! The persisted model contract.
//!
//! JSON, camelCase keys:
//!
//! ```json
//! {
//!   "featureOrder": ["f1", "f2"],
//!   "weights": [1.0, -1.0],
//!   "intercept": 0.0,
//!   "center": [0.0, 0.0],
//!   "scale": [1.0, 1.0],
//!   "modelId": "optional",
//!   "modelVersion": "optional"
//! }
//! ```
//!
//! Export followed by import reproduces every value bit for bit.

use std::path::Path;

use serde::{Deserialize, Serialize};

use periop_core::constants::INLINE_ORIGIN;
use periop_core::errors::ModelError;

use crate::defaults;

/// Serializable model parameters, exchanged between training-time export
/// and inference-time load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifact {
    pub feature_order: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    pub center: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl ModelArtifact {
    /// Parse from a JSON string. Structural validation happens when the
    /// artifact becomes a `ModelHandle`.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Self::parse(json, INLINE_ORIGIN)
    }

    /// Read and parse a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ModelError::FileNotFound {
                path: origin.clone(),
            },
            _ => ModelError::Io {
                path: origin.clone(),
                reason: e.to_string(),
            },
        })?;
        Self::parse(&content, &origin)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the artifact as pretty JSON.
    pub fn write_to(&self, path: &Path) -> Result<(), ModelError> {
        let origin = path.display().to_string();
        let json = self.to_json().map_err(|e| ModelError::Parse {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|e| ModelError::Io {
            path: origin,
            reason: e.to_string(),
        })
    }

    /// The documented default parameters.
    pub fn defaults() -> Self {
        Self {
            feature_order: defaults::DEFAULT_FEATURES.iter().map(|s| s.to_string()).collect(),
            weights: defaults::DEFAULT_WEIGHTS.to_vec(),
            intercept: defaults::DEFAULT_INTERCEPT,
            center: defaults::DEFAULT_CENTER.to_vec(),
            scale: defaults::DEFAULT_SCALE.to_vec(),
            model_id: Some(defaults::DEFAULT_MODEL_ID.to_string()),
            model_version: Some(defaults::DEFAULT_MODEL_VERSION.to_string()),
        }
    }

    fn parse(json: &str, origin: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Parse {
            origin: origin.to_string(),
            reason: e.to_string(),
        })
    }
}
