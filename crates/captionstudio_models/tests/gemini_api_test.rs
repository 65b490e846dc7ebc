//! Live Gemini API test. Run with `--features api` and GEMINI_API_KEY set.

use captionstudio_core::{CaptionParams, Platform, SamplingParams, StructuredRequest, Tone, build_plan};
use captionstudio_interface::GenerationDriver;
use captionstudio_models::{GeminiClient, ModelCatalog};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_structured_generation() {
    dotenvy::dotenv().ok();
    let client = GeminiClient::from_env(ModelCatalog::default())
        .expect("GEMINI_API_KEY must be set for API tests");

    let request = CaptionParams::builder()
        .topic("reusable bamboo toothbrush")
        .tone(Tone::Funny)
        .platform(Platform::TikTok)
        .build()
        .expect("valid params")
        .into_request(false)
        .expect("valid request");

    let text = client
        .generate_structured(&StructuredRequest::new(
            build_plan(&request),
            SamplingParams::default(),
        ))
        .await
        .expect("API call succeeded");

    let value: serde_json::Value = serde_json::from_str(text.trim()).expect("JSON output");
    assert!(value["captions"].is_array());
    assert!(value["hashtags"].is_array());
}
