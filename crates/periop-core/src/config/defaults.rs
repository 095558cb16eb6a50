// Single source of truth for all default values.

// --- Model ---
pub const DEFAULT_FALLBACK_TO_DEFAULTS: bool = true;
pub const DEFAULT_LAZY_LOAD: bool = true;

// --- Batch ---
pub const DEFAULT_STRICT_COLUMNS: bool = true;
pub const DEFAULT_PARALLEL: bool = false;
pub const DEFAULT_MIN_PARALLEL_ROWS: usize = 256;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
