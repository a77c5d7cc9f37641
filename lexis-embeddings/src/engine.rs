//! EmbeddingEngine: the main entry point for lexis-embeddings.
//!
//! Wraps a provider with dimension validation and the query cache.
//! Implements `IEmbeddingProvider`.

use lexis_core::config::EmbeddingConfig;
use lexis_core::errors::{EmbeddingError, LexisResult};
use lexis_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::QueryCache;
use crate::providers;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: Option<QueryCache>,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Wrap an existing provider. A `cache_size` of 0 disables caching.
    pub fn new(provider: Box<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        let cache = (config.cache_size > 0).then(|| QueryCache::new(config.cache_size));

        info!(
            provider = provider.name(),
            dims = config.dimensions,
            cache = config.cache_size,
            "EmbeddingEngine initialized"
        );

        Self {
            provider,
            cache,
            dimensions: config.dimensions,
        }
    }

    /// Build the configured provider and wrap it.
    pub fn from_config(config: &EmbeddingConfig, api_key: Option<&str>) -> LexisResult<Self> {
        let provider = providers::create_provider(config, api_key)?;
        Ok(Self::new(provider, config))
    }

    /// Embed a query, consulting the cache first.
    pub fn embed_query(&self, query: &str) -> LexisResult<Vec<f32>> {
        if let Some(vec) = self.cache.as_ref().and_then(|c| c.get(query)) {
            debug!("cache hit for query embedding");
            return Ok(vec);
        }

        let embedding = self.provider.embed(query)?;
        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }

        if let Some(cache) = &self.cache {
            cache.insert(query, embedding.clone());
        }
        Ok(embedding)
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> LexisResult<Vec<f32>> {
        self.embed_query(text)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "lexis-embedding-engine"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        output: Vec<f32>,
    }

    impl IEmbeddingProvider for CountingProvider {
        fn embed(&self, _text: &str) -> LexisResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.output.clone())
        }

        fn dimensions(&self) -> usize {
            self.output.len()
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn engine(
        output: Vec<f32>,
        dims: usize,
        cache_size: u64,
    ) -> (EmbeddingEngine, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CountingProvider {
            calls: Arc::clone(&calls),
            output,
        };
        let config = EmbeddingConfig {
            dimensions: dims,
            cache_size,
            ..Default::default()
        };
        (EmbeddingEngine::new(Box::new(provider), &config), calls)
    }

    #[test]
    fn repeated_query_hits_cache() {
        let (engine, calls) = engine(vec![1.0, 0.0], 2, 16);
        let a = engine.embed_query("Frage").unwrap();
        let b = engine.embed_query("Frage").unwrap();
        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn zero_cache_size_always_calls_provider() {
        let (engine, calls) = engine(vec![1.0, 0.0], 2, 0);
        engine.embed_query("Frage").unwrap();
        engine.embed_query("Frage").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dimension_mismatch_is_an_error_and_not_cached() {
        let (engine, calls) = engine(vec![1.0, 0.0, 0.0], 2, 16);
        assert!(engine.embed_query("Frage").is_err());
        assert!(engine.embed_query("Frage").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn trait_impl_reports_configured_dims() {
        let (engine, _) = engine(vec![1.0, 0.0], 2, 16);
        let provider: &dyn IEmbeddingProvider = &engine;
        assert_eq!(provider.dimensions(), 2);
        assert_eq!(provider.embed("x").unwrap().len(), 2);
    }
}
