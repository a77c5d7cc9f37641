//! In-memory query embedding cache using moka.
//!
//! Repeated questions within one process skip the embedding call.

use std::time::Duration;

use moka::sync::Cache;

/// Query embedding cache keyed by the blake3 hash of the query text.
pub struct QueryCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryCache {
    /// Create a new cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();

        Self { cache }
    }

    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&Self::key(text))
    }

    pub fn insert(&self, text: &str, embedding: Vec<f32>) {
        self.cache.insert(Self::key(text), embedding);
    }
}
