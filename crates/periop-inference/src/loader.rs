//! Model loading from a source, with the degraded-mode fallback policy.

use std::path::PathBuf;

use periop_core::constants::INLINE_ORIGIN;
use periop_core::errors::ModelError;
use periop_core::models::ModelProvenance;
use periop_core::tracing::events;

use crate::artifact::ModelArtifact;
use crate::handle::ModelHandle;

/// Where model parameters are read from.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    /// A JSON artifact on disk.
    File(PathBuf),
    /// A JSON artifact already in memory.
    Json(String),
    /// The documented default parameters.
    Defaults,
}

impl ModelSource {
    /// Human-readable origin used in provenance and logs.
    pub fn origin(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Json(_) => INLINE_ORIGIN.to_string(),
            Self::Defaults => "<defaults>".to_string(),
        }
    }
}

/// Load and validate a model. Fails with a load error if the source is
/// missing, malformed, or structurally invalid (e.g. a zero scale).
pub fn load_model(source: &ModelSource) -> Result<ModelHandle, ModelError> {
    let handle = match source {
        ModelSource::File(path) => {
            let artifact = ModelArtifact::from_file(path)?;
            ModelHandle::from_artifact(artifact, ModelProvenance::Source { origin: source.origin() })?
        }
        ModelSource::Json(json) => {
            let artifact = ModelArtifact::from_json(json)?;
            ModelHandle::from_artifact(artifact, ModelProvenance::Source { origin: source.origin() })?
        }
        ModelSource::Defaults => ModelHandle::builtin()?,
    };
    events::model_loaded(handle.model_id(), &source.origin(), handle.schema().len());
    Ok(handle)
}

/// Load a model, substituting the documented defaults on failure.
///
/// The substitute is flagged degraded and carries the failure reason;
/// a `degraded_mode` warning is emitted.
pub fn load_model_or_defaults(source: &ModelSource) -> Result<ModelHandle, ModelError> {
    match load_model(source) {
        Ok(handle) => Ok(handle),
        Err(err) => {
            let reason = err.to_string();
            events::degraded_mode(&reason);
            ModelHandle::fallback(reason)
        }
    }
}
