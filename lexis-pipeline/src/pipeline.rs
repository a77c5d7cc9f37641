//! Pipeline: drives one query through embedding, retrieval, and answering.

use lexis_answer::build_conversation;
use lexis_core::config::PipelineMode;
use lexis_core::errors::{EmbeddingError, LexisResult};
use lexis_core::models::{AnswerOutcome, Query};
use lexis_core::traits::{IAnsweringClient, IEmbeddingProvider};
use lexis_retrieval::RetrievalEngine;
use tracing::{debug, info, warn};

use crate::context::AppContext;
use crate::outcome::PipelineOutcome;
use crate::state::PipelineState;

pub struct Pipeline<'a> {
    context: &'a AppContext,
    embedder: Box<dyn IEmbeddingProvider>,
    answerer: Option<Box<dyn IAnsweringClient>>,
    mode: PipelineMode,
    state: PipelineState,
}

impl<'a> Pipeline<'a> {
    /// Pipeline in the configured mode, with no answering client yet.
    pub fn new(context: &'a AppContext, embedder: Box<dyn IEmbeddingProvider>) -> Self {
        Self {
            context,
            embedder,
            answerer: None,
            mode: context.config.pipeline.mode,
            state: PipelineState::Idle,
        }
    }

    pub fn with_answerer(mut self, answerer: Box<dyn IAnsweringClient>) -> Self {
        self.answerer = Some(answerer);
        self
    }

    pub fn with_mode(mut self, mode: PipelineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn mode(&self) -> PipelineMode {
        self.mode
    }

    fn transition(&mut self, next: PipelineState) {
        debug!(from = %self.state, to = %next, "pipeline transition");
        self.state = next;
    }

    /// Run one query.
    ///
    /// # Errors
    /// Only embedder failures are returned; the state is `Idle` afterwards
    /// and no answer is requested. Answer failures become
    /// [`AnswerOutcome::Unavailable`].
    pub fn submit(&mut self, query: &Query) -> LexisResult<PipelineOutcome> {
        if query.is_empty() {
            warn!("empty query ignored");
            return Ok(PipelineOutcome::EmptyQuery);
        }

        info!(relevance = %query.relevance, chars = query.text.chars().count(), "query received");
        self.transition(PipelineState::AwaitingEmbedding);

        let vector = match self.embed(&query.text) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "embedding failed");
                self.transition(PipelineState::Idle);
                return Err(e);
            }
        };

        let context = self.context;
        let mut engine = RetrievalEngine::new(&context.corpus, &context.config.retrieval);
        if let Some(counter) = context.token_counter() {
            engine = engine.with_token_counter(counter);
        }
        let retrieval = engine.run(query, &vector);

        if self.mode == PipelineMode::PromptOnly {
            self.transition(PipelineState::Idle);
            return Ok(PipelineOutcome::Prompt {
                prompt: retrieval.prompt,
                ranked: retrieval.ranked,
            });
        }

        self.transition(PipelineState::AwaitingAnswer);
        let outcome = self.answer(&retrieval.prompt);
        self.transition(PipelineState::Idle);

        Ok(PipelineOutcome::Answer {
            outcome,
            prompt: retrieval.prompt,
            ranked: retrieval.ranked,
        })
    }

    fn embed(&self, text: &str) -> LexisResult<Vec<f32>> {
        let vector = self.embedder.embed(text)?;
        let expected = self.context.corpus.dimensions();
        if expected != 0 && vector.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: vector.len(),
            }
            .into());
        }
        Ok(vector)
    }

    fn answer(&self, prompt: &str) -> AnswerOutcome {
        let Some(answerer) = self.answerer.as_deref() else {
            warn!("no answering client configured");
            return AnswerOutcome::Unavailable {
                reason: "no answering client configured".to_string(),
            };
        };

        let conversation = build_conversation(&self.context.config.answer, prompt);
        match answerer.answer(&conversation) {
            Ok(Some(text)) => AnswerOutcome::Answered(text),
            Ok(None) => AnswerOutcome::Unavailable {
                reason: "the model returned no answer".to_string(),
            },
            Err(e) => {
                warn!(client = answerer.name(), error = %e, "answer request failed");
                AnswerOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
