use serde::{Deserialize, Serialize};

use super::defaults;

/// Answering client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerConfig {
    /// Answer provider. Only "openai" is supported.
    pub provider: String,
    /// Chat model name.
    pub model: String,
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    /// Request timeout (seconds).
    pub timeout_secs: u64,
    /// System instruction sent ahead of every prompt.
    pub system_prompt: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_ANSWER_PROVIDER.to_string(),
            model: defaults::DEFAULT_ANSWER_MODEL.to_string(),
            base_url: defaults::DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_ANSWER_TIMEOUT_SECS,
            system_prompt: defaults::DEFAULT_SYSTEM_PROMPT.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}
