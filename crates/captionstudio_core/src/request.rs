//! Caller input and the validated generation request built from it.

use crate::{Platform, Tone, is_baseline_language};
use captionstudio_error::{StudioError, StudioErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Audience used in the prompt when the caller leaves it blank.
pub const DEFAULT_AUDIENCE: &str = "a general audience";

/// Raw form input, before entitlement is known.
///
/// # Examples
///
/// ```
/// use captionstudio_core::{CaptionParams, Platform, Tone};
///
/// let params = CaptionParams::builder()
///     .topic("new coffee machine")
///     .tone(Tone::Casual)
///     .platform(Platform::Instagram)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.topic(), "new coffee machine");
/// assert!(params.audience().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[builder(default, setter(into))]
pub struct CaptionParams {
    /// Topic, product or idea
    topic: String,
    /// Target audience
    #[builder(setter(into, strip_option))]
    audience: Option<String>,
    /// Tone of voice
    tone: Tone,
    /// Target platform
    platform: Platform,
    /// Output language (Pro only)
    #[builder(setter(into, strip_option))]
    language: Option<String>,
    /// Custom brand voice (Pro only)
    #[builder(setter(into, strip_option))]
    brand_voice: Option<String>,
}

impl CaptionParams {
    /// Returns a builder for constructing CaptionParams.
    pub fn builder() -> CaptionParamsBuilder {
        CaptionParamsBuilder::default()
    }

    /// Validate the input and attach the caller's entitlement.
    ///
    /// # Errors
    ///
    /// Returns [`StudioErrorKind::EmptyTopic`] when the topic is blank.
    pub fn into_request(self, is_entitled: bool) -> Result<GenerationRequest, StudioError> {
        if self.topic.trim().is_empty() {
            return Err(StudioError::new(StudioErrorKind::EmptyTopic));
        }

        Ok(GenerationRequest {
            topic: self.topic,
            audience: self.audience,
            tone: self.tone,
            platform: self.platform,
            language: self.language,
            brand_voice: self.brand_voice,
            is_entitled,
        })
    }
}

/// A validated request for one generation.
///
/// Only obtainable through [`CaptionParams::into_request`], so the topic is
/// never empty. Language and brand voice are stored as given and filtered
/// by entitlement when read through the `effective_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GenerationRequest {
    topic: String,
    audience: Option<String>,
    tone: Tone,
    platform: Platform,
    language: Option<String>,
    brand_voice: Option<String>,
    is_entitled: bool,
}

impl GenerationRequest {
    /// Audience text for the prompt, falling back to [`DEFAULT_AUDIENCE`].
    pub fn audience_or_default(&self) -> &str {
        self.audience
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AUDIENCE)
    }

    /// Language override, if entitled and different from the baseline.
    pub fn effective_language(&self) -> Option<&str> {
        if !self.is_entitled {
            return None;
        }
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !is_baseline_language(l))
    }

    /// Brand voice, if entitled and non-blank.
    pub fn effective_brand_voice(&self) -> Option<&str> {
        if !self.is_entitled {
            return None;
        }
        self.brand_voice
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
