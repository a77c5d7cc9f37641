//! # lexis-core
//!
//! Foundation crate for the Lexis statute retriever.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LexisConfig;
pub use errors::{LexisError, LexisResult};
pub use models::{AnswerOutcome, Conversation, Query, RankedSection, Relevance, Section};
pub use traits::{IAnsweringClient, IEmbeddingProvider};
