//! Answering client registry.

pub mod openai_chat;

pub use openai_chat::OpenAiChatClient;

use lexis_core::config::AnswerConfig;
use lexis_core::errors::{AnswerError, LexisResult};
use lexis_core::models::Conversation;
use lexis_core::traits::IAnsweringClient;
use tracing::info;

/// Create the configured answering client.
///
/// # Errors
/// `MissingCredential` without a non-blank key, `UnknownProvider` for
/// anything other than "openai".
pub fn create_client(
    config: &AnswerConfig,
    api_key: Option<&str>,
) -> LexisResult<Box<dyn IAnsweringClient>> {
    match config.provider.as_str() {
        "openai" => {
            let key = api_key
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| AnswerError::MissingCredential {
                    env_var: config.api_key_env.clone(),
                })?;
            let client = OpenAiChatClient::from_config(config, key)?;
            info!(provider = "openai", model = %config.model, "answering client ready");
            Ok(Box::new(client))
        }
        other => Err(AnswerError::UnknownProvider {
            provider: other.to_string(),
        }
        .into()),
    }
}

/// System instruction followed by the composed prompt.
pub fn build_conversation(config: &AnswerConfig, prompt: &str) -> Conversation {
    Conversation::new(config.system_prompt.as_str(), prompt)
}
