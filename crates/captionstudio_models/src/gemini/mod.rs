//! Google Gemini driver.
//!
//! Talks to the REST `generateContent` endpoint directly so the request can
//! carry a response schema and sampling settings.

mod client;
mod conversions;
mod dto;

pub use client::{API_KEY_VARS, GEMINI_API_BASE, GeminiClient, api_key_from_env};
pub use conversions::{extract_text, to_gemini_request, to_gemini_schema};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GenerationConfigBuilder, Part, PromptFeedback, UsageMetadata,
};
