//! Prompt size accounting with tiktoken's cl100k_base tokenizer.

use std::sync::Arc;

use lexis_core::errors::{LexisError, LexisResult};
use moka::sync::Cache;
use tiktoken_rs::CoreBPE;

/// Token counter for composed prompts. Results are cached per blake3
/// content hash, so re-composing the same prompt is free.
#[derive(Clone)]
pub struct PromptTokenCounter {
    bpe: Arc<CoreBPE>,
    cache: Cache<String, usize>,
}

impl PromptTokenCounter {
    /// Load the tokenizer. This is slow; build one per process.
    pub fn new(cache_capacity: u64) -> LexisResult<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| LexisError::Tokenizer {
            reason: e.to_string(),
        })?;
        Ok(Self {
            bpe: Arc::new(bpe),
            cache: Cache::new(cache_capacity),
        })
    }

    /// Count tokens in `text` (uncached).
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    pub fn count_cached(&self, text: &str) -> usize {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        self.cache.get_with(hash, || self.count(text))
    }
}

impl std::fmt::Debug for PromptTokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptTokenCounter")
            .field("cached", &self.cache.entry_count())
            .finish()
    }
}
