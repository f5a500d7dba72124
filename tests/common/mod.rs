//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Parameter file from the happy-path scenario.
pub const HAPPY_PARAMS: &str = r#"{"network_type":"WS","system_size_x":10,"system_size_y":20,"number_of_trials":5,"number_of_generations":100,"seed":42}"#;

/// Stdout expected for [`HAPPY_PARAMS`].
#[allow(dead_code)]
pub const HAPPY_OUTPUT: &str = "network_type = WS
system_size_x = 10
system_size_y = 20
number_of_trials = 5
number_of_generations = 100
seed = 42
";

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `name` inside `dir` and return the full path.
#[allow(dead_code)]
pub fn write_params(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write params file");
    path
}
