//! RetrievalEngine: ranking, filtering, and composition over one corpus.

use std::collections::HashSet;

use lexis_core::config::RetrievalConfig;
use lexis_core::models::{Query, RankedSection, Relevance};
use lexis_corpus::CorpusStore;
use tracing::{debug, warn};

use crate::composer::{ComposerOptions, PromptComposer};
use crate::filter;
use crate::ranking::SimilarityRanker;
use crate::tokens::PromptTokenCounter;

/// Result of one retrieval pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalOutput {
    pub ranked: Vec<RankedSection>,
    pub prompt: String,
    /// Present when a token counter is attached.
    pub prompt_tokens: Option<usize>,
}

/// Borrows the corpus; cheap to build per request.
#[derive(Debug, Clone)]
pub struct RetrievalEngine<'a> {
    corpus: &'a CorpusStore,
    ranker: SimilarityRanker,
    composer: PromptComposer,
    tokens: Option<&'a PromptTokenCounter>,
    max_prompt_tokens: usize,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(corpus: &'a CorpusStore, config: &RetrievalConfig) -> Self {
        Self {
            corpus,
            ranker: SimilarityRanker::new(config.top_k),
            composer: PromptComposer::new(ComposerOptions::from(config)),
            tokens: None,
            max_prompt_tokens: config.max_prompt_tokens,
        }
    }

    /// Attach a token counter; oversized prompts are logged, never cut.
    pub fn with_token_counter(mut self, counter: &'a PromptTokenCounter) -> Self {
        self.tokens = Some(counter);
        self
    }

    pub fn composer(&self) -> &PromptComposer {
        &self.composer
    }

    /// Rank the corpus against `query_vector`.
    ///
    /// In relevance-aware mode a category other than `none` restricts the
    /// candidates to sections whose tags carry the category marker.
    pub fn rank(&self, query_vector: &[f32], relevance: Relevance) -> Vec<RankedSection> {
        let embeddings = self.corpus.embeddings();
        if !self.composer.options().relevance_aware || relevance == Relevance::General {
            return self.ranker.rank(query_vector, embeddings);
        }

        let allowed: HashSet<&str> = filter::filter(self.corpus.sections(), relevance)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        debug!(
            relevance = %relevance,
            candidates = allowed.len(),
            "relevance filter applied"
        );
        self.ranker
            .rank_where(query_vector, embeddings, |id| allowed.contains(id))
    }

    pub fn compose(&self, query: &Query, ranked: &[RankedSection]) -> String {
        self.composer
            .compose(&query.text, query.relevance, ranked, self.corpus)
    }

    /// Rank, then compose.
    pub fn run(&self, query: &Query, query_vector: &[f32]) -> RetrievalOutput {
        let ranked = self.rank(query_vector, query.relevance);
        let prompt = self.compose(query, &ranked);

        let prompt_tokens = self.tokens.map(|counter| counter.count_cached(&prompt));
        if let Some(count) = prompt_tokens {
            if count > self.max_prompt_tokens {
                warn!(
                    tokens = count,
                    limit = self.max_prompt_tokens,
                    "composed prompt exceeds the configured token limit"
                );
            }
        }

        debug!(
            results = ranked.len(),
            top_score = ranked.first().map(|r| r.score),
            prompt_chars = prompt.chars().count(),
            "retrieval complete"
        );

        RetrievalOutput {
            ranked,
            prompt,
            prompt_tokens,
        }
    }
}
