//! Configuration system for Periop.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod batch_config;
pub mod defaults;
pub mod model_config;
pub mod observability_config;
pub mod periop_config;

pub use batch_config::BatchConfig;
pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use periop_config::PeriopConfig;
