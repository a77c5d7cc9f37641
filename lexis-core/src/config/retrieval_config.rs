use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval and prompt composition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of ranked sections handed to the composer.
    pub top_k: usize,
    /// Filter by relevance category and annotate applicability.
    pub relevance_aware: bool,
    /// Prefix each section's content with its id (simple prompt only).
    pub title_prefix: bool,
    /// Prompts above this token count are logged as oversized.
    pub max_prompt_tokens: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            relevance_aware: defaults::DEFAULT_RELEVANCE_AWARE,
            title_prefix: defaults::DEFAULT_TITLE_PREFIX,
            max_prompt_tokens: defaults::DEFAULT_MAX_PROMPT_TOKENS,
        }
    }
}
