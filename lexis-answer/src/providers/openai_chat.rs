//! OpenAI chat completions client.

use std::time::Duration;

use lexis_core::config::AnswerConfig;
use lexis_core::errors::{AnswerError, LexisResult};
use lexis_core::models::{ChatMessage, Conversation};
use lexis_core::traits::IAnsweringClient;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Blocking client for `POST {base_url}/chat/completions`.
pub struct OpenAiChatClient {
    client: Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

fn request_failed(reason: impl Into<String>) -> AnswerError {
    AnswerError::RequestFailed {
        reason: reason.into(),
    }
}

impl OpenAiChatClient {
    pub fn new(api_key: &str, base_url: &str, model: &str, timeout: Duration) -> LexisResult<Self> {
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
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.to_string(),
        })
    }

    pub fn from_config(config: &AnswerConfig, api_key: &str) -> LexisResult<Self> {
        Self::new(
            api_key,
            &config.base_url,
            &config.model,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, conversation: &Conversation) -> Result<Option<String>, AnswerError> {
        let body = ChatRequest {
            model: &self.model,
            messages: &conversation.messages,
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

        let parsed: ChatResponse = resp.json().map_err(|e| AnswerError::MalformedResponse {
            reason: format!("JSON parse error: {e}"),
        })?;

        let answer = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty());

        match &answer {
            Some(text) => debug!(
                model = %self.model,
                chars = text.chars().count(),
                "answer received"
            ),
            None => warn!(model = %self.model, "model returned no answer content"),
        }
        Ok(answer)
    }
}

impl IAnsweringClient for OpenAiChatClient {
    fn answer(&self, conversation: &Conversation) -> LexisResult<Option<String>> {
        Ok(self.request(conversation)?)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
