//! Request shape handed to a generation driver.

use crate::{GenerationPlan, ModelTier, ResponseSchema, SamplingParams};
use derive_getters::Getters;
use serde::Serialize;

/// One structured-output request: tier, prompt, schema and sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct StructuredRequest {
    tier: ModelTier,
    prompt: String,
    schema: ResponseSchema,
    sampling: SamplingParams,
}

impl StructuredRequest {
    /// Pair a built plan with sampling parameters.
    pub fn new(plan: GenerationPlan, sampling: SamplingParams) -> Self {
        let (tier, prompt, schema) = plan.into_parts();
        Self {
            tier,
            prompt,
            schema,
            sampling,
        }
    }
}
