//! # lexis-retrieval
//!
//! The query engine: rank the corpus against a query vector, optionally
//! narrow it by relevance category, and compose the prompt.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── filter            (relevance category → candidate sections)
//! ├── SimilarityRanker  (cosine similarity, stable descending sort, top K)
//! ├── PromptComposer
//! │   ├── relevance-aware (context sentence + applicability notes)
//! │   └── simple          (fixed question/instruction template)
//! └── PromptTokenCounter (cl100k_base, size warnings only)
//! ```

pub mod composer;
pub mod engine;
pub mod filter;
pub mod ranking;
pub mod similarity;
pub mod tokens;

pub use composer::{ComposerOptions, PromptComposer};
pub use engine::{RetrievalEngine, RetrievalOutput};
pub use ranking::SimilarityRanker;
pub use similarity::cosine_similarity;
pub use tokens::PromptTokenCounter;
