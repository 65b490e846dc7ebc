//! Request builder: turns a validated request into prompt, schema and tier.

use crate::{GenerationRequest, ModelTier, ResponseSchema};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Everything needed to ask the service for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GenerationPlan {
    /// Model tier selector
    tier: ModelTier,
    /// Instruction text
    prompt: String,
    /// Response contract
    schema: ResponseSchema,
}

impl GenerationPlan {
    /// Split into tier, prompt and schema.
    pub fn into_parts(self) -> (ModelTier, String, ResponseSchema) {
        (self.tier, self.prompt, self.schema)
    }
}

/// Build the plan for `request`.
///
/// Pure: the output depends only on the request. Directives appear in a
/// fixed order; the language, brand-voice and insights directives are
/// omitted unless they apply.
///
/// # Examples
///
/// ```
/// use captionstudio_core::{build_plan, CaptionParams, ModelTier};
///
/// let request = CaptionParams::builder()
///     .topic("new coffee machine")
///     .build()
///     .unwrap()
///     .into_request(false)
///     .unwrap();
///
/// let plan = build_plan(&request);
/// assert_eq!(*plan.tier(), ModelTier::Standard);
/// assert!(plan.prompt().contains("a general audience"));
/// ```
#[instrument(skip_all, fields(entitled = *request.is_entitled(), platform = %request.platform()))]
pub fn build_plan(request: &GenerationRequest) -> GenerationPlan {
    let entitled = *request.is_entitled();
    let mut lines = Vec::with_capacity(9);

    if let Some(language) = request.effective_language() {
        lines.push(format!("Write all of the content in {}.", language));
    }
    if let Some(voice) = request.effective_brand_voice() {
        lines.push(format!(
            "Adopt the following custom brand voice: \"{}\".",
            voice
        ));
    }

    lines.push(format!(
        "Create 5 engaging and scroll-stopping social media captions for the platform: {}.",
        request.platform()
    ));
    lines.push(format!("The topic is: \"{}\".", request.topic().trim()));
    lines.push(format!(
        "The target audience is: \"{}\".",
        request.audience_or_default()
    ));
    lines.push(format!("The desired tone is: {}.", request.tone()));
    lines.push("Include relevant emojis and a strong call-to-action in each caption.".to_string());
    lines.push("Also, generate a list of 10-15 relevant hashtags for this content.".to_string());

    if entitled {
        lines.push(
            "Finally, provide exactly 3 actionable insights for boosting engagement on this post."
                .to_string(),
        );
    }

    let prompt = lines.join("\n");
    debug!(prompt_len = prompt.len(), directives = lines.len(), "Built prompt");

    GenerationPlan {
        tier: ModelTier::for_entitlement(entitled),
        prompt,
        schema: ResponseSchema::for_entitlement(entitled),
    }
}
