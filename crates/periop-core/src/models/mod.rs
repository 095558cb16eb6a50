//! Record, result, and metadata types shared across the workspace.

pub mod batch_entry;
pub mod model_info;
pub mod prediction_result;
pub mod raw_value;
pub mod record;

pub use batch_entry::{BatchEntry, BatchSummary};
pub use model_info::{FeatureCatalog, HealthStatus, ModelInfo, ModelProvenance, TemplateRow};
pub use prediction_result::{Outcome, PredictionResult};
pub use raw_value::RawValue;
pub use record::Record;
