//! Integration tests for the OpenAI client.
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yj_core::{DivinationError, Diviner, DivinerConfig, TextGenerator};
use yj_llm::{LlmConfig, LlmError, OpenAiClient};

fn config_for(server: &MockServer) -> LlmConfig {
    LlmConfig::default()
        .with_api_key("sk-test")
        .with_base_url(server.uri())
        .with_retry_backoff(Duration::from_millis(1))
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
    }))
}

/// The blocking client must not be built or dropped on an async worker thread.
async fn complete(config: LlmConfig, prompt: &'static str) -> Result<String, LlmError> {
    tokio::task::spawn_blocking(move || OpenAiClient::new(config)?.complete(prompt))
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(bearer_token("sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(completion("A fine day to travel."))
        .expect(1)
        .mount(&server)
        .await;

    let text = complete(config_for(&server), "hello").await.unwrap();
    assert_eq!(text, "A fine day to travel.");
}

#[tokio::test(flavor = "multi_thread")]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;

    let err = complete(config_for(&server), "hello").await.unwrap_err();
    match err {
        LlmError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(completion("third time lucky"))
        .expect(1)
        .mount(&server)
        .await;

    let text = complete(config_for(&server), "hello").await.unwrap();
    assert_eq!(text, "third time lucky");
}

#[tokio::test(flavor = "multi_thread")]
async fn gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(2)
        .mount(&server)
        .await;

    let config = config_for(&server).with_max_retries(1);
    let err = complete(config, "hello").await.unwrap_err();
    assert!(matches!(err, LlmError::Status { status: 429, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = complete(config_for(&server), "hello").await.unwrap_err();
    assert!(matches!(err, LlmError::MalformedResponse(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn diviner_uses_client_as_generator() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("Small matters go well."))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let report = tokio::task::spawn_blocking(move || {
        let client = OpenAiClient::new(config).unwrap();
        let mut diviner = Diviner::new(client, DivinerConfig::default().with_seed(1));
        diviner.divine(Some("385962"), "career")
    })
    .await
    .unwrap()
    .unwrap();

    assert!(report.contains("火泽睽 (Index 38)"));
    assert!(report.contains("\"Career\""));
    assert!(report.ends_with("Small matters go well."));
}

#[tokio::test(flavor = "multi_thread")]
async fn failures_surface_as_unavailable_interpretation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let err = tokio::task::spawn_blocking(move || {
        let client = OpenAiClient::new(config).unwrap();
        assert!(client.generate("x").is_err());
        let mut diviner = Diviner::new(client, DivinerConfig::default());
        diviner.divine(Some("385962"), "career")
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, DivinationError::InterpretationUnavailable(_)));
}
