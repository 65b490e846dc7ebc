//! Gemini REST driver.

use crate::ModelCatalog;
use crate::gemini::{GenerateContentResponse, conversions};
use async_trait::async_trait;
use captionstudio_core::{ModelTier, StructuredRequest};
use captionstudio_error::{ConfigError, ConfigErrorKind, GenerationError, GenerationErrorKind};
use captionstudio_interface::GenerationDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Public Gemini API endpoint.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Driver for Gemini's `generateContent` endpoint.
///
/// Sends one request per call with structured-output settings. No retries
/// and no client-side timeout beyond reqwest's defaults.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    models: ModelCatalog,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("models", &self.models)
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the key is blank or the HTTP client
    /// cannot be built.
    #[instrument(skip(api_key), fields(standard = %models.standard(), enhanced = %models.enhanced()))]
    pub fn new(api_key: impl Into<String>, models: ModelCatalog) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::MissingApiKey(
                API_KEY_VARS.to_vec(),
            )));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::HttpClient(e.to_string())))?;

        debug!("Created Gemini client");

        Ok(Self {
            client,
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
            models,
        })
    }

    /// Creates a client using the first API key found in [`API_KEY_VARS`].
    ///
    /// # Errors
    ///
    /// A missing key is a fatal startup condition reported as
    /// [`ConfigErrorKind::MissingApiKey`].
    pub fn from_env(models: ModelCatalog) -> Result<Self, ConfigError> {
        Self::new(api_key_from_env()?, models)
    }

    /// Point the client at another endpoint (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Endpoint base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Tier to model mapping.
    pub fn models(&self) -> &ModelCatalog {
        &self.models
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

/// First non-blank value among [`API_KEY_VARS`].
///
/// # Errors
///
/// Returns [`ConfigErrorKind::MissingApiKey`] when none is set.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingApiKey(API_KEY_VARS.to_vec())))
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(skip(self, request), fields(tier = %request.tier(), model = tracing::field::Empty))]
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<String, GenerationError> {
        let model = self.models.for_tier(*request.tier());
        tracing::Span::current().record("model", model);

        let body = conversions::to_gemini_request(request)?;

        debug!(
            prompt_len = request.prompt().len(),
            insights = request.schema().includes_insights(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let body_text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Failed to read body: {}",
                e
            )))
        })?;

        let parsed: GenerateContentResponse = serde_json::from_str(&body_text).map_err(|e| {
            error!(error = ?e, "Failed to parse response envelope");
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Invalid response envelope: {}",
                e
            )))
        })?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                total_tokens = ?usage.total_token_count,
                "Received response"
            );
        }

        conversions::extract_text(&parsed)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self, tier: ModelTier) -> &str {
        self.models.for_tier(tier)
    }
}
