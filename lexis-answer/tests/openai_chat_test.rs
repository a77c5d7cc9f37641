use std::time::Duration;

use lexis_answer::OpenAiChatClient;
use lexis_core::errors::{AnswerError, LexisError, LexisResult};
use lexis_core::models::Conversation;
use lexis_core::traits::IAnsweringClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn conversation() -> Conversation {
    Conversation::new(
        "Du beantwortest alle Fragen auf Deutsch.",
        "Frage: Wer darf abstimmen?",
    )
}

async fn answer_via(server: &MockServer) -> LexisResult<Option<String>> {
    let base = format!("{}/v1", server.uri());
    tokio::task::spawn_blocking(move || -> LexisResult<Option<String>> {
        let client = OpenAiChatClient::new("sk-test", &base, "gpt-test", Duration::from_secs(5))?;
        client.answer(&conversation())
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-test",
            "messages": [
                {"role": "system", "content": "Du beantwortest alle Fragen auf Deutsch."},
                {"role": "user", "content": "Frage: Wer darf abstimmen?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Alle Stimmberechtigten."}},
                {"message": {"role": "assistant", "content": "Zweite Wahl."}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let answer = answer_via(&server).await.unwrap();
    assert_eq!(answer.as_deref(), Some("Alle Stimmberechtigten."));
}

#[tokio::test]
async fn empty_choices_is_no_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    assert_eq!(answer_via(&server).await.unwrap(), None);
}

#[tokio::test]
async fn blank_content_is_no_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "   "}}]
        })))
        .mount(&server)
        .await;

    assert_eq!(answer_via(&server).await.unwrap(), None);
}

#[tokio::test]
async fn server_error_is_request_failure_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(1)
        .mount(&server)
        .await;

    let err = answer_via(&server).await.unwrap_err();
    assert!(matches!(err, LexisError::Answer(AnswerError::RequestFailed { .. })));
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = answer_via(&server).await.unwrap_err();
    assert!(matches!(err, LexisError::Answer(AnswerError::MalformedResponse { .. })));
}
