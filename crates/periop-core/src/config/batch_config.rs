use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch prediction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Reject a batch whose columns collectively miss a schema feature.
    pub strict_columns: bool,
    /// Score materialized batches on the rayon pool.
    pub parallel: bool,
    /// Smallest batch worth scoring in parallel.
    pub min_parallel_rows: usize,
}

impl BatchConfig {
    /// Whether a batch of `rows` rows should go to the parallel path.
    pub fn use_parallel(&self, rows: usize) -> bool {
        self.parallel && rows >= self.min_parallel_rows
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            strict_columns: defaults::DEFAULT_STRICT_COLUMNS,
            parallel: defaults::DEFAULT_PARALLEL,
            min_parallel_rows: defaults::DEFAULT_MIN_PARALLEL_ROWS,
        }
    }
}
