//! Test fixture loader for Lexis corpora and scenario files.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("corpus").exists() {
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
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Absolute path to the sample embeddings file (4-dimensional vectors).
pub fn sample_embeddings_path() -> PathBuf {
    fixture_path("corpus/article_embeddings.json")
}

/// Absolute path to the sample sections file with law names and tags.
pub fn sample_sections_path() -> PathBuf {
    fixture_path("corpus/law_data.json")
}

/// Absolute path to the sample sections file in the plain paragraph-list format.
pub fn sample_plain_sections_path() -> PathBuf {
    fixture_path("corpus/law_data_plain.json")
}

/// Dimensionality of every vector in the sample corpus.
pub const SAMPLE_DIMENSIONS: usize = 4;
