use lexis_core::models::{RankedSection, Relevance, Section};
use lexis_corpus::{CorpusStore, SectionEmbedding};
use lexis_retrieval::{cosine_similarity, filter, PromptComposer, SimilarityRanker};
use proptest::prelude::*;

fn vector(dims: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, dims)
}

fn corpus(dims: usize) -> impl Strategy<Value = Vec<SectionEmbedding>> {
    prop::collection::vec(vector(dims), 0..20).prop_map(|vectors| {
        vectors
            .into_iter()
            .enumerate()
            .map(|(i, vector)| SectionEmbedding {
                id: format!("§ {i}"),
                vector,
            })
            .collect()
    })
}

fn tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "Directly Applicable: Assembly",
            "Directly Applicable: Mail Voting",
            "Indirectly Applicable: Assembly",
            "Non-Assembly-Related",
            "Wahlen",
        ])
        .prop_map(String::from),
        0..3,
    )
}

fn relevance() -> impl Strategy<Value = Relevance> {
    prop::sample::select(Relevance::ALL.to_vec())
}

proptest! {
    #[test]
    fn ranking_is_sorted_and_bounded(query in vector(8), embeddings in corpus(8)) {
        let ranked = SimilarityRanker::new(5).rank(&query, &embeddings);
        prop_assert_eq!(ranked.len(), embeddings.len().min(5));
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(ranked.iter().all(|r| (-1.0..=1.0).contains(&r.score)));
    }

    #[test]
    fn ranking_ids_are_distinct_corpus_ids(query in vector(8), embeddings in corpus(8)) {
        let ranked = SimilarityRanker::new(5).rank(&query, &embeddings);
        let mut seen = std::collections::HashSet::new();
        for r in &ranked {
            prop_assert!(embeddings.iter().any(|e| e.id == r.id));
            prop_assert!(seen.insert(r.id.clone()));
        }
    }

    #[test]
    fn similarity_is_symmetric(a in vector(16), b in vector(16)) {
        prop_assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn self_similarity_is_one(a in vector(16)) {
        prop_assume!(a.iter().any(|x| x.abs() > 1e-3));
        prop_assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn filter_is_idempotent(all_tags in prop::collection::vec(tags(), 0..10), r in relevance()) {
        let sections: Vec<Section> = all_tags
            .into_iter()
            .enumerate()
            .map(|(i, t)| Section::new(format!("§ {i}"), vec![]).with_tags(t))
            .collect();
        let once = filter::filter(&sections, r);
        let twice = filter::filter(once.iter().copied(), r);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn general_filter_is_identity(all_tags in prop::collection::vec(tags(), 0..10)) {
        let sections: Vec<Section> = all_tags
            .into_iter()
            .enumerate()
            .map(|(i, t)| Section::new(format!("§ {i}"), vec![]).with_tags(t))
            .collect();
        let kept = filter::filter(&sections, Relevance::General);
        prop_assert_eq!(kept.len(), sections.len());
        for (kept, original) in kept.iter().zip(sections.iter()) {
            prop_assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn composition_is_deterministic(
        query in "[a-zA-ZäöüÄÖÜ ?]{0,40}",
        r in relevance(),
        aware in any::<bool>(),
        titles in any::<bool>(),
        n in 0usize..6,
    ) {
        let store = CorpusStore::from_parts(
            (0..6).map(|i| (format!("§ {i}"), vec![1.0, i as f32])).collect(),
            (0..6)
                .map(|i| {
                    Section::new(format!("§ {i}"), vec![format!("Absatz {i}.")])
                        .with_tags(["Directly Applicable: Assembly"])
                })
                .collect(),
        )
        .unwrap();
        let ranked: Vec<RankedSection> =
            (0..n).map(|i| RankedSection::new(format!("§ {i}"), 0.5)).collect();
        let composer = PromptComposer::new(lexis_retrieval::ComposerOptions {
            relevance_aware: aware,
            title_prefix: titles,
        });
        let first = composer.compose(&query, r, &ranked, &store);
        let second = composer.compose(&query, r, &ranked, &store);
        prop_assert!(first.contains(&query));
        prop_assert_eq!(first, second);
    }
}
