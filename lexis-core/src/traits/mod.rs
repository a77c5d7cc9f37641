mod answering;
mod embedding;

pub use answering::IAnsweringClient;
pub use embedding::IEmbeddingProvider;
