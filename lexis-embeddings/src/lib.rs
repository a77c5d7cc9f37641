//! # lexis-embeddings
//!
//! Turns a question into a vector comparable with the precomputed corpus.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine (IEmbeddingProvider)
//! ├── QueryCache (moka, blake3-keyed)
//! ├── dimension validation
//! └── provider
//!     └── OpenAiEmbedder (blocking HTTP, single attempt)
//! ```

pub mod cache;
pub mod engine;
pub mod providers;

pub use cache::QueryCache;
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, OpenAiEmbedder};
