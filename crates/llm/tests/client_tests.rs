use std::time::Duration;

use llm::{OpenAiClient, OpenAiConfig};
use pipeline::{
    extract_response_text, ApiKey, ProviderError, ReasoningEffort, ResponsesApi, WebSearchRequest,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_key() -> ApiKey {
    ApiKey::from_lookup(|name| (name == "API_KEY").then(|| "sk-test".to_string()))
        .expect("test key")
}

fn client_for(server: &MockServer) -> OpenAiClient {
    let config = OpenAiConfig::builder(test_key())
        .api_base_url(format!("{}/", server.uri()))
        .build();
    OpenAiClient::new(&config).expect("client creation")
}

#[tokio::test]
async fn test_posts_web_search_request() {
    let mock_server = MockServer::start().await;

    let payload = serde_json::json!({
        "id": "resp_1",
        "object": "response",
        "output": [
            { "type": "web_search_call", "id": "ws_1", "status": "completed" },
            {
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "output_text", "text": "추천 목록", "annotations": [] }]
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(serde_json::json!({
            "model": "gpt-5",
            "tools": [{ "type": "web_search" }],
            "reasoning": { "effort": "low" },
            "input": "서울시 종로구 맛집 추천"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = WebSearchRequest::new(ReasoningEffort::Low, pipeline::TEST_QUERY);

    let response = client.create_response(&request).await.expect("response");

    assert_eq!(response, payload);
    assert_eq!(extract_response_text(&response), "추천 목록");
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "type": "invalid_request_error", "message": "Incorrect API key provided" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .create_response(&WebSearchRequest::new(ReasoningEffort::High, "q"))
        .await
        .expect_err("should fail");

    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .create_response(&WebSearchRequest::new(ReasoningEffort::Medium, "q"))
        .await
        .expect_err("should fail");

    let text = err.to_string();
    assert!(text.contains("503"), "status missing: {text}");
    assert!(text.contains("upstream unavailable"), "body missing: {text}");
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .create_response(&WebSearchRequest::new(ReasoningEffort::Low, "q"))
        .await
        .expect_err("should fail");

    assert!(matches!(err, ProviderError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let config = OpenAiConfig::builder(test_key())
        .api_base_url("http://127.0.0.1:1")
        .build();
    let client = OpenAiClient::new(&config).expect("client creation");

    let err = client
        .create_response(&WebSearchRequest::new(ReasoningEffort::Low, "q"))
        .await
        .expect_err("should fail");

    assert!(matches!(err, ProviderError::Transport { .. }));
}

#[tokio::test]
async fn test_configured_timeout_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "output_text": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let config = OpenAiConfig::builder(test_key())
        .api_base_url(mock_server.uri())
        .timeout(Duration::from_millis(200))
        .build();
    assert_eq!(config.timeout, Some(Duration::from_millis(200)));
    let client = OpenAiClient::new(&config).expect("client creation");

    let err = client
        .create_response(&WebSearchRequest::new(ReasoningEffort::Low, "q"))
        .await
        .expect_err("should time out");

    assert!(matches!(err, ProviderError::Transport { .. }));
}
