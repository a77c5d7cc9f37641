//! # lexis-corpus
//!
//! The corpus store. Two static JSON files are read once at startup and held
//! read-only for the life of the process:
//!
//! ```text
//! CorpusStore
//! ├── embeddings  (id → vector, file order preserved)
//! └── sections    (id → paragraphs, law name, tags)
//! ```

pub mod loader;
pub mod store;

pub use store::{CorpusStore, SectionEmbedding};
