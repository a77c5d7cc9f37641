//! Provider registry.

pub mod openai_provider;

pub use openai_provider::OpenAiEmbedder;

use lexis_core::config::EmbeddingConfig;
use lexis_core::errors::{EmbeddingError, LexisResult};
use lexis_core::traits::IEmbeddingProvider;
use tracing::info;

/// Create the configured provider.
///
/// # Errors
/// `MissingCredential` when the provider needs a key and none was supplied,
/// `UnknownProvider` for anything other than "openai".
pub fn create_provider(
    config: &EmbeddingConfig,
    api_key: Option<&str>,
) -> LexisResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "openai" => {
            let key = api_key
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| EmbeddingError::MissingCredential {
                    env_var: config.api_key_env.clone(),
                })?;
            let provider = OpenAiEmbedder::from_config(config, key)?;
            info!(provider = "openai", model = %config.model, "embedding provider ready");
            Ok(Box::new(provider))
        }
        other => Err(EmbeddingError::UnknownProvider {
            provider: other.to_string(),
        }
        .into()),
    }
}
