//! Tier to model-id mapping.

use captionstudio_core::ModelTier;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default model for free callers.
pub const DEFAULT_STANDARD_MODEL: &str = "gemini-2.5-flash";

/// Default model for entitled callers.
pub const DEFAULT_ENHANCED_MODEL: &str = "gemini-2.5-pro";

/// Which concrete model serves each tier.
///
/// # Examples
///
/// ```
/// use captionstudio_core::ModelTier;
/// use captionstudio_models::ModelCatalog;
///
/// let catalog = ModelCatalog::default();
/// assert_eq!(catalog.for_tier(ModelTier::Standard), "gemini-2.5-flash");
/// assert_eq!(catalog.for_tier(ModelTier::Enhanced), "gemini-2.5-pro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ModelCatalog {
    standard: String,
    enhanced: String,
}

impl ModelCatalog {
    /// Catalog with explicit model ids.
    pub fn new(standard: impl Into<String>, enhanced: impl Into<String>) -> Self {
        Self {
            standard: standard.into(),
            enhanced: enhanced.into(),
        }
    }

    /// Model id for `tier`.
    pub fn for_tier(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Standard => &self.standard,
            ModelTier::Enhanced => &self.enhanced,
        }
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_STANDARD_MODEL, DEFAULT_ENHANCED_MODEL)
    }
}
