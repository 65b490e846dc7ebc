//! Gemini driver tests against a local mock server.

use captionstudio_core::{
    CaptionParams, ModelTier, SamplingParams, StructuredRequest, build_plan,
};
use captionstudio_error::{ConfigErrorKind, GenerationErrorKind};
use captionstudio_interface::GenerationDriver;
use captionstudio_models::{GeminiClient, ModelCatalog, to_gemini_schema};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "AIzaTestApiKey";

fn structured(entitled: bool) -> StructuredRequest {
    let request = CaptionParams::builder()
        .topic("new coffee machine")
        .build()
        .expect("valid params")
        .into_request(entitled)
        .expect("valid request");
    StructuredRequest::new(build_plan(&request), SamplingParams::default())
}

fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 80,
            "candidatesTokenCount": 240,
            "totalTokenCount": 320
        }
    })
}

async fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(API_KEY, ModelCatalog::default())
        .expect("client builds")
        .with_base_url(server.uri())
}

#[tokio::test]
async fn test_standard_tier_request_shape() {
    let server = MockServer::start().await;
    let payload = r#"{"captions":["a"],"hashtags":["b"]}"#;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let text = client
        .generate_structured(&structured(false))
        .await
        .expect("request succeeds");
    assert_eq!(text, payload);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).expect("json body");

    assert_eq!(body["contents"][0]["role"], "user");
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text");
    assert!(prompt.contains("new coffee machine"));

    let config = &body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert!((config["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    assert!((config["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    assert_eq!(config["responseSchema"]["type"], "OBJECT");
    assert_eq!(
        config["responseSchema"]["required"],
        json!(["captions", "hashtags"])
    );
    assert!(config["responseSchema"]["properties"]["insights"].is_null());
}

#[tokio::test]
async fn test_enhanced_tier_uses_enhanced_model_and_insights_schema() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .generate_structured(&structured(true))
        .await
        .expect("request succeeds");

    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = serde_json::from_slice(&requests[0].body).expect("json body");
    let schema = &body["generationConfig"]["responseSchema"];
    assert_eq!(schema["properties"]["insights"]["type"], "ARRAY");
    assert_eq!(schema["properties"]["insights"]["items"]["type"], "STRING");
    assert_eq!(schema["required"], json!(["captions", "hashtags", "insights"]));
}

#[tokio::test]
async fn test_multiple_text_parts_are_concatenated() {
    let server = MockServer::start().await;
    let body = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "{\"captions\":" }, { "text": "[]}" }] }
        }]
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let text = client_for(&server)
        .await
        .generate_structured(&structured(false))
        .await
        .expect("request succeeds");
    assert_eq!(text, "{\"captions\":[]}");
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .generate_structured(&structured(false))
        .await
        .expect_err("503 fails");

    assert!(err.kind.is_transport());
    assert_eq!(
        err.kind,
        GenerationErrorKind::HttpStatus {
            status_code: 503,
            message: "overloaded".to_string(),
        }
    );
}

#[tokio::test]
async fn test_missing_candidates_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .generate_structured(&structured(false))
        .await
        .expect_err("no candidates");
    assert!(err.kind.is_malformed());
}

#[tokio::test]
async fn test_blocked_prompt_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .generate_structured(&structured(false))
        .await
        .expect_err("blocked");
    assert!(matches!(
        err.kind,
        GenerationErrorKind::MalformedResponse(ref msg) if msg.contains("SAFETY")
    ));
}

#[tokio::test]
async fn test_non_json_envelope_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .generate_structured(&structured(false))
        .await
        .expect_err("not json");
    assert!(err.kind.is_malformed());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = GeminiClient::new(API_KEY, ModelCatalog::default())
        .expect("client builds")
        .with_base_url(uri);

    let err = client
        .generate_structured(&structured(false))
        .await
        .expect_err("connection refused");
    assert!(matches!(err.kind, GenerationErrorKind::Transport(_)));
}

#[test]
fn test_blank_api_key_is_config_error() {
    let err = GeminiClient::new("  ", ModelCatalog::default()).expect_err("blank key");
    assert!(matches!(err.kind, ConfigErrorKind::MissingApiKey(_)));
}

#[test]
fn test_driver_identity() {
    let client = GeminiClient::new(API_KEY, ModelCatalog::new("flash-x", "pro-x"))
        .expect("client builds");
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(ModelTier::Standard), "flash-x");
    assert_eq!(client.model_name(ModelTier::Enhanced), "pro-x");
    assert!(!format!("{:?}", client).contains(API_KEY));
}

#[test]
fn test_schema_item_descriptions() {
    let schema = to_gemini_schema(structured(false).schema());
    assert_eq!(
        schema["properties"]["hashtags"]["items"]["description"],
        "A relevant hashtag without the # symbol."
    );
}
