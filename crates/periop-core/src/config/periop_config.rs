//! Top-level Periop configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BatchConfig, ModelConfig, ObservabilityConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PERIOP_*`)
/// 2. Project config (`periop.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PeriopConfig {
    pub model: ModelConfig,
    pub batch: BatchConfig,
    pub observability: ObservabilityConfig,
}

impl PeriopConfig {
    /// Load configuration with layered resolution, then validate.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing or embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.min_parallel_rows == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "batch.min_parallel_rows".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        if let Some(path) = &self.model.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "model.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Unparseable values are ignored and the lower layer wins.
    fn apply_env_overrides(config: &mut PeriopConfig) {
        if let Ok(val) = std::env::var("PERIOP_MODEL_PATH") {
            config.model.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PERIOP_MODEL_FALLBACK") {
            if let Ok(v) = val.parse::<bool>() {
                config.model.fallback_to_defaults = v;
            }
        }
        if let Ok(val) = std::env::var("PERIOP_MODEL_LAZY") {
            if let Ok(v) = val.parse::<bool>() {
                config.model.lazy = v;
            }
        }
        if let Ok(val) = std::env::var("PERIOP_BATCH_STRICT_COLUMNS") {
            if let Ok(v) = val.parse::<bool>() {
                config.batch.strict_columns = v;
            }
        }
        if let Ok(val) = std::env::var("PERIOP_BATCH_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.batch.parallel = v;
            }
        }
        if let Ok(val) = std::env::var("PERIOP_BATCH_MIN_PARALLEL_ROWS") {
            if let Ok(v) = val.parse::<usize>() {
                config.batch.min_parallel_rows = v;
            }
        }
        if let Ok(val) = std::env::var("PERIOP_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }
}
