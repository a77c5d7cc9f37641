use serde::{Deserialize, Serialize};

use super::defaults;

/// Locations of the two static corpus files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// JSON object mapping section id to embedding vector.
    pub embeddings_path: String,
    /// JSON object mapping section id to paragraphs and metadata.
    pub sections_path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            embeddings_path: defaults::DEFAULT_EMBEDDINGS_PATH.to_string(),
            sections_path: defaults::DEFAULT_SECTIONS_PATH.to_string(),
        }
    }
}
