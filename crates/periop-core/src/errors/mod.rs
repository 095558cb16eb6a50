//! Error handling for Periop.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod feature_error;
pub mod model_error;
pub mod numeric_error;
pub mod periop_error;
pub mod schema_error;

pub use config_error::ConfigError;
pub use error_code::PeriopErrorCode;
pub use feature_error::FeatureConversionError;
pub use model_error::ModelError;
pub use numeric_error::NumericError;
pub use periop_error::{PeriopError, PeriopResult};
pub use schema_error::SchemaError;
