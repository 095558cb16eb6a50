use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Model loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the JSON model artifact. `None` means defaults only.
    pub path: Option<PathBuf>,
    /// Substitute the documented default parameters when loading fails.
    pub fallback_to_defaults: bool,
    /// Defer loading until the first prediction.
    pub lazy: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: None,
            fallback_to_defaults: defaults::DEFAULT_FALLBACK_TO_DEFAULTS,
            lazy: defaults::DEFAULT_LAZY_LOAD,
        }
    }
}
