//! Error taxonomy. One enum per subsystem, aggregated into [`LexisError`].

mod answer_error;
mod corpus_error;
mod embedding_error;

pub use answer_error::AnswerError;
pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;

/// Top-level error for every library crate in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum LexisError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Answer(#[from] AnswerError),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("tokenizer unavailable: {reason}")]
    Tokenizer { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type LexisResult<T> = Result<T, LexisError>;
