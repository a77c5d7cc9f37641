//! SimilarityRanker: score → stable descending sort → top K.

use lexis_core::constants::TOP_K;
use lexis_core::models::RankedSection;
use lexis_corpus::SectionEmbedding;

use crate::similarity::cosine_similarity;

/// Ranks corpus embeddings by cosine similarity to a query vector.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityRanker {
    top_k: usize,
}

impl SimilarityRanker {
    /// `top_k` is capped at [`TOP_K`]; the prompt never carries more.
    pub fn new(top_k: usize) -> Self {
        Self {
            top_k: top_k.min(TOP_K),
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Rank every embedding, keeping the `top_k` best.
    pub fn rank(&self, query: &[f32], embeddings: &[SectionEmbedding]) -> Vec<RankedSection> {
        self.rank_where(query, embeddings, |_| true)
    }

    /// Rank only the embeddings whose id passes `keep`.
    ///
    /// Ties keep the order of `embeddings`.
    pub fn rank_where<F>(
        &self,
        query: &[f32],
        embeddings: &[SectionEmbedding],
        keep: F,
    ) -> Vec<RankedSection>
    where
        F: Fn(&str) -> bool,
    {
        let mut scored: Vec<RankedSection> = embeddings
            .iter()
            .filter(|e| keep(&e.id))
            .map(|e| RankedSection::new(e.id.clone(), cosine_similarity(query, &e.vector)))
            .collect();

        // `sort_by` is stable, so equal scores stay in corpus order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.top_k);
        scored
    }
}

impl Default for SimilarityRanker {
    fn default() -> Self {
        Self::new(TOP_K)
    }
}
