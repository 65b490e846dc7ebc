//! Model tier selection and sampling parameters.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Which class of model serves a request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelTier {
    /// Fast model for free callers
    Standard,
    /// Stronger model for entitled callers
    Enhanced,
}

impl ModelTier {
    /// Tier for a caller with the given entitlement.
    pub fn for_entitlement(is_entitled: bool) -> Self {
        if is_entitled {
            ModelTier::Enhanced
        } else {
            ModelTier::Standard
        }
    }
}

/// Sampling values sent with every request, identical across tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling value
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_p: 0.95,
        }
    }
}
