//! Test utilities for Caption Studio tests.
//!
//! This module provides a scripted driver and request helpers.

use captionstudio_core::{CaptionParams, GenerationRequest, Platform, Tone};

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver};

/// Payload with 5 captions and 12 hashtags, plus 3 insights when asked.
#[allow(dead_code)]
pub fn sample_payload(with_insights: bool) -> String {
    let captions: Vec<String> = (1..=5).map(|i| format!("Caption {} ☕ Try it today!", i)).collect();
    let hashtags: Vec<String> = (1..=12).map(|i| format!("coffee{}", i)).collect();
    let mut payload = serde_json::json!({
        "captions": captions,
        "hashtags": hashtags,
    });
    if with_insights {
        payload["insights"] = serde_json::json!([
            "Post between 7 and 9am",
            "Ask a question in the first line",
            "Reply to comments within an hour",
        ]);
    }
    payload.to_string()
}

/// Form input for `topic` with fixed tone and platform.
#[allow(dead_code)]
pub fn params(topic: &str) -> CaptionParams {
    CaptionParams::builder()
        .topic(topic)
        .tone(Tone::Casual)
        .platform(Platform::Instagram)
        .build()
        .expect("Failed to build test params")
}

/// Validated request for `topic`.
#[allow(dead_code)]
pub fn request(topic: &str, is_entitled: bool) -> GenerationRequest {
    params(topic)
        .into_request(is_entitled)
        .expect("Failed to build test request")
}
