//! AppContext: configuration and corpus, built once at startup.

use lexis_core::config::LexisConfig;
use lexis_core::errors::LexisResult;
use lexis_corpus::CorpusStore;
use lexis_retrieval::PromptTokenCounter;
use tracing::warn;

const TOKEN_CACHE_CAPACITY: u64 = 256;

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppContext {
    pub config: LexisConfig,
    pub corpus: CorpusStore,
    tokens: Option<PromptTokenCounter>,
}

impl AppContext {
    /// Load the corpus named in `config` and the prompt tokenizer.
    ///
    /// A tokenizer that fails to load only disables prompt size warnings.
    pub fn load(config: LexisConfig) -> LexisResult<Self> {
        let corpus = CorpusStore::load(&config.corpus)?;
        let tokens = match PromptTokenCounter::new(TOKEN_CACHE_CAPACITY) {
            Ok(counter) => Some(counter),
            Err(e) => {
                warn!(error = %e, "prompt token counting disabled");
                None
            }
        };
        Ok(Self {
            config,
            corpus,
            tokens,
        })
    }

    /// Context over an already-built corpus, without token counting.
    pub fn new(config: LexisConfig, corpus: CorpusStore) -> Self {
        Self {
            config,
            corpus,
            tokens: None,
        }
    }

    pub fn with_token_counter(mut self, counter: PromptTokenCounter) -> Self {
        self.tokens = Some(counter);
        self
    }

    pub fn token_counter(&self) -> Option<&PromptTokenCounter> {
        self.tokens.as_ref()
    }
}
