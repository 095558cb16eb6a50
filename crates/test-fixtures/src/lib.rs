//! Test fixture loader for model artifacts and batch scenarios.
//!
//! Fixtures live in the workspace-level `test-fixtures/` directory and are
//! shared by the tests of every crate.

use std::path::PathBuf;

use periop_core::models::Record;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("models").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Load a fixture file verbatim.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Path of a model artifact under `models/`.
pub fn model_path(name: &str) -> PathBuf {
    fixture_path(&format!("models/{name}.json"))
}

/// Raw JSON text of a model artifact under `models/`.
pub fn model_json(name: &str) -> String {
    load_fixture_text(&format!("models/{name}.json"))
}

/// Expected outcome of one batch row.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedRow {
    pub row: usize,
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<u8>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// A batch of records scored against a named model fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchScenario {
    pub description: String,
    pub model: String,
    pub records: Vec<Record>,
    pub expected: Vec<ExpectedRow>,
}

/// Load a batch scenario under `batches/`.
pub fn load_batch(name: &str) -> BatchScenario {
    load_fixture(&format!("batches/{name}.json"))
}
