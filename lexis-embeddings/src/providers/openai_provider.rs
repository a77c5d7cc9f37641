//! OpenAI embeddings client.
//!
//! `POST {base_url}/embeddings`, bearer auth, one attempt per call. Failures
//! surface as `EmbeddingError`; there is no retry.

use std::time::Duration;

use lexis_core::config::EmbeddingConfig;
use lexis_core::errors::{EmbeddingError, LexisResult};
use lexis_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Blocking embeddings client for OpenAI-compatible endpoints.
pub struct OpenAiEmbedder {
    client: Client,
    endpoint: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    #[serde(default)]
    index: usize,
}

fn request_failed(reason: impl Into<String>) -> EmbeddingError {
    EmbeddingError::RequestFailed {
        reason: reason.into(),
    }
}

impl OpenAiEmbedder {
    pub fn new(
        api_key: &str,
        base_url: &str,
        model: &str,
        dimensions: usize,
        timeout: Duration,
    ) -> LexisResult<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
            .map_err(|e| request_failed(format!("invalid API key header: {e}")))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| request_failed(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/embeddings", base_url.trim_end_matches('/')),
            model: model.to_string(),
            dimensions,
        })
    }

    pub fn from_config(config: &EmbeddingConfig, api_key: &str) -> LexisResult<Self> {
        Self::new(
            api_key,
            &config.base_url,
            &config.model,
            config.dimensions,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbeddingRequest {
            model: &self.model,
            input: [text],
        };
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| request_failed(format!("HTTP error: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(request_failed(format!("API returned {status}: {body}")));
        }

        let parsed: EmbeddingResponse =
            resp.json()
                .map_err(|e| EmbeddingError::MalformedResponse {
                    reason: format!("JSON parse error: {e}"),
                })?;

        let embedding = parsed
            .data
            .into_iter()
            .min_by_key(|d| d.index)
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::MalformedResponse {
                reason: "response contained no embeddings".to_string(),
            })?;

        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            });
        }

        debug!(model = %self.model, dims = embedding.len(), "embedding received");
        Ok(embedding)
    }
}

impl IEmbeddingProvider for OpenAiEmbedder {
    fn embed(&self, text: &str) -> LexisResult<Vec<f32>> {
        Ok(self.request(text)?)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
