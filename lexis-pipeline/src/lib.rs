//! # lexis-pipeline
//!
//! One question at a time through
//! `Idle → AwaitingEmbedding → AwaitingAnswer → Idle`.
//! The embedder and answering client are injected as trait objects, so the
//! pipeline itself makes no network calls of its own.

pub mod context;
pub mod outcome;
pub mod pipeline;
pub mod state;

pub use context::AppContext;
pub use outcome::PipelineOutcome;
pub use pipeline::Pipeline;
pub use state::PipelineState;
