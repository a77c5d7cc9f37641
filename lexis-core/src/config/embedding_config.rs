use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider. Only "openai" is supported.
    pub provider: String,
    /// Model name sent with every request.
    pub model: String,
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    /// Expected vector length; must match the precomputed corpus.
    pub dimensions: usize,
    /// Request timeout (seconds).
    pub timeout_secs: u64,
    /// L1 query cache max entries. 0 disables the cache.
    pub cache_size: u64,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: defaults::DEFAULT_OPENAI_BASE_URL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}
