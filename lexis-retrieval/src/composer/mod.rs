//! PromptComposer: turns a query and its ranked sections into prompt text.
//!
//! Two layouts share one entry point:
//! - relevance-aware: framing, category context, numbered articles with
//!   law name and an applicability note, closing instruction
//! - simple: the fixed question/instruction template with `id\ncontent`
//!   entries

pub mod templates;

use lexis_core::config::RetrievalConfig;
use lexis_core::constants::UNKNOWN_LAW;
use lexis_core::models::{RankedSection, Relevance};
use lexis_corpus::CorpusStore;

use crate::filter::is_directly_applicable;

/// Layout switches for [`PromptComposer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerOptions {
    pub relevance_aware: bool,
    /// Simple layout only: put the section id above its content.
    pub title_prefix: bool,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            relevance_aware: true,
            title_prefix: true,
        }
    }
}

impl From<&RetrievalConfig> for ComposerOptions {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            relevance_aware: config.relevance_aware,
            title_prefix: config.title_prefix,
        }
    }
}

/// Pure prompt builder. Same inputs, same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer {
    options: ComposerOptions,
}

impl PromptComposer {
    pub fn new(options: ComposerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ComposerOptions {
        self.options
    }

    /// Compose the prompt. Ids missing from `corpus` contribute empty content.
    pub fn compose(
        &self,
        query: &str,
        relevance: Relevance,
        ranked: &[RankedSection],
        corpus: &CorpusStore,
    ) -> String {
        if self.options.relevance_aware {
            self.compose_relevance_aware(query, relevance, ranked, corpus)
        } else {
            self.compose_simple(query, ranked, corpus)
        }
    }

    fn compose_simple(
        &self,
        query: &str,
        ranked: &[RankedSection],
        corpus: &CorpusStore,
    ) -> String {
        let entries: Vec<String> = ranked
            .iter()
            .map(|r| {
                let content = corpus.content_of(&r.id);
                if self.options.title_prefix {
                    format!("{}\n{}", r.id, content)
                } else {
                    content
                }
            })
            .collect();

        format!(
            "{}{}\n{}\n{}\n{}",
            templates::SIMPLE_QUESTION_PREFIX,
            query,
            templates::SIMPLE_INSTRUCTION,
            entries.join("\n"),
            templates::SIMPLE_CLOSING,
        )
    }

    fn compose_relevance_aware(
        &self,
        query: &str,
        relevance: Relevance,
        ranked: &[RankedSection],
        corpus: &CorpusStore,
    ) -> String {
        let mut blocks = Vec::with_capacity(ranked.len() + 3);
        blocks.push(format!(
            "{}\n{}",
            templates::framing(query),
            templates::relevance_context(relevance)
        ));
        blocks.push(templates::ARTICLES_HEADER.to_string());

        for (i, r) in ranked.iter().enumerate() {
            let section = corpus.section(&r.id);
            let law = section
                .and_then(|s| s.law.as_deref())
                .unwrap_or(UNKNOWN_LAW);
            let note = match relevance {
                Relevance::General => templates::NOTE_NEUTRAL,
                _ if section.is_some_and(|s| is_directly_applicable(s, relevance)) => {
                    templates::NOTE_DIRECT
                }
                _ => templates::NOTE_NOT_DIRECT,
            };
            blocks.push(format!(
                "{}. {} ({})\n{}{}\n{}",
                i + 1,
                r.id,
                law,
                templates::APPLICABILITY_LABEL,
                note,
                corpus.content_of(&r.id),
            ));
        }

        blocks.push(templates::CLOSING.to_string());
        blocks.join("\n\n")
    }
}
