//! Layered TOML configuration. Every section falls back to `defaults`.

mod answer_config;
mod corpus_config;
pub mod defaults;
mod embedding_config;
mod observability_config;
mod pipeline_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use answer_config::AnswerConfig;
pub use corpus_config::CorpusConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::{PipelineConfig, PipelineMode};
pub use retrieval_config::RetrievalConfig;

use crate::constants::TOP_K;
use crate::errors::{LexisError, LexisResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexisConfig {
    pub corpus: CorpusConfig,
    pub embedding: EmbeddingConfig,
    pub answer: AnswerConfig,
    pub retrieval: RetrievalConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl LexisConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> LexisResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| LexisError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> LexisResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| LexisError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&raw)
    }

    /// Reject values that would make every request fail or break the
    /// five-article prompt.
    pub fn validate(&self) -> LexisResult<()> {
        if self.retrieval.top_k == 0 || self.retrieval.top_k > TOP_K {
            return Err(LexisError::Config {
                reason: format!("retrieval.top_k must be between 1 and {TOP_K}"),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(LexisError::Config {
                reason: "embedding.dimensions must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
